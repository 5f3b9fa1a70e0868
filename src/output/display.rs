//! Display functions for command results

use super::formatters::{outcome_to_emoji, score_bar, word_list};
use crate::commands::{CandidateSummary, CheckResult, DeepReport, RankReport};
use crate::core::GuessRecord;
use colored::Colorize;

/// Print the built-in filter self-check
pub fn print_self_check(result: &CheckResult) {
    let verdict = if result.possible {
        "possible".green()
    } else {
        "impossible".red()
    };
    println!(
        "Self-check: {} given {} → {}",
        result.candidate.text().to_uppercase(),
        result.record,
        verdict
    );
}

/// Print the history a run was filtered with
pub fn print_history(history: &[GuessRecord]) {
    if history.is_empty() {
        println!("History:    {}", "(none)".bright_black());
        return;
    }
    for (i, record) in history.iter().enumerate() {
        println!(
            "Guess {}:    {} {} {}",
            i + 1,
            record.guess.text().to_uppercase(),
            outcome_to_emoji(record.outcome),
            record.outcome.to_string().bright_black()
        );
    }
}

/// Print how many answers survive the history
pub fn print_candidate_summary(summary: &CandidateSummary) {
    println!(
        "\n📚 {} of {} answers remain",
        summary.candidates.len().to_string().bright_yellow().bold(),
        summary.total_answers
    );

    if let Some(words) = summary.listing() {
        println!("   Possible answers: {}", word_list(words).bright_green());
    }
}

/// Print the terminal "no possible answers" message
pub fn print_no_answers() {
    println!("\n{}", "NO POSSIBLE ANSWERS".red().bold());
}

/// Print the top ranked guesses
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        "TOP GUESSES (expected candidates eliminated)".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, scored) in report.top.iter().enumerate() {
        let bar = score_bar(scored.score, report.candidate_count, 20);
        let marker = if scored.is_candidate { "✓" } else { " " };
        println!(
            "{:>3}. {} [{}] {} {:>4} groups, worst {:<4} {}",
            i + 1,
            scored.word.text().to_uppercase().bright_yellow().bold(),
            bar.green(),
            format!("{:>9.3}", scored.score).bright_yellow(),
            scored.partitions,
            scored.largest_partition,
            marker.green()
        );
    }

    println!(
        "\n   Scored {} guesses against {} candidates in {:.2}s on {} workers",
        report.guesses_scored,
        report.candidate_count,
        report.duration.as_secs_f64(),
        report.workers
    );
}

/// Print the lookahead results
pub fn print_deep_report(report: &DeepReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        "TOP GUESSES (expected guesses to solve)".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, result) in report.top.iter().enumerate() {
        let marker = if result.is_candidate { "✓" } else { " " };
        println!(
            "{:>3}. {} {} {}",
            i + 1,
            result.word.text().to_uppercase().bright_yellow().bold(),
            format!("{:>7.4}", result.expected_guesses).bright_yellow(),
            marker.green()
        );
    }

    println!(
        "\n   Searched {} guesses (depth {}, breadth {}) over {} candidates in {:.2}s",
        report.searched,
        report.config.max_depth,
        report.config.breadth,
        report.candidate_count,
        report.duration.as_secs_f64()
    );
}

/// Print the result of an ad-hoc outcome check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{} vs {}: {} {}",
        result.record.guess.text().to_uppercase().bright_yellow(),
        result.candidate.text().to_uppercase().bright_yellow(),
        outcome_to_emoji(result.record.outcome),
        result.record.outcome
    );
    let verdict = if result.possible {
        "consistent".green()
    } else {
        "inconsistent".red()
    };
    println!("Answer is {verdict} with its own feedback");
}
