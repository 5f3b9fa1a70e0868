//! Wordle Ranker - CLI
//!
//! Filters the answer list against the guesses played so far and ranks every
//! allowed guess by how many candidates it is expected to eliminate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wordle_ranker::{
    commands::{
        DeepConfig, RankConfig, check_pair, default_history, rank_allowed, run_deep, self_check,
        summarize_candidates,
        rank::DEFAULT_TOP,
    },
    core::{GuessRecord, Word},
    output::{
        print_candidate_summary, print_check_result, print_deep_report, print_history,
        print_no_answers, print_rank_report, print_self_check, scoring_progress,
    },
    scoring::{DEFAULT_WORKERS, LookaheadConfig},
    wordlists::{DEFAULT_ALLOWED_PATH, DEFAULT_ANSWERS_PATH, load_from_file},
};

/// Exit status when no answer is consistent with the history
///
/// Errors exit with 1 and clap usage errors with 2.
const EXIT_NO_ANSWERS: u8 = 3;

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Rank Wordle guesses by expected candidates eliminated",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list, one word per line
    #[arg(long, global = true, env = "WORDLE_ANSWERS", default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// Allowed guess list, one word per line
    #[arg(long, global = true, env = "WORDLE_ALLOWED", default_value = DEFAULT_ALLOWED_PATH)]
    allowed: PathBuf,

    /// A guess played so far as WORD:OUTCOME, e.g. roate:+-++- (repeatable)
    #[arg(short, long = "guess", global = true, value_parser = GuessRecord::parse)]
    guesses: Vec<GuessRecord>,

    /// Start from an empty history instead of the built-in one
    #[arg(long, global = true, conflicts_with = "guesses")]
    no_history: bool,

    /// Number of scoring workers
    #[arg(short = 'j', long, global = true, default_value_t = DEFAULT_WORKERS)]
    threads: usize,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Rank allowed guesses by expected candidates eliminated (default)
    Rank {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },

    /// Show the outcome of a guess against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer it is scored against
        answer: String,
    },

    /// Rank guesses by expected guesses to solve, with lookahead
    Deep {
        /// Levels searched below the first guess
        #[arg(long, default_value = "1")]
        depth: usize,

        /// Guesses kept per level
        #[arg(long, default_value = "100")]
        breadth: usize,

        /// Number of guesses to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Rank mode if no command given
    match cli.command.clone().unwrap_or(Commands::Rank { top: DEFAULT_TOP }) {
        Commands::Check { guess, answer } => {
            let result = check_pair(&guess, &answer)?;
            print_check_result(&result);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Rank { top } => run_rank_command(&cli, top),
        Commands::Deep {
            depth,
            breadth,
            top,
        } => {
            let lookahead = LookaheadConfig {
                max_depth: depth,
                breadth,
            };
            run_deep_command(&cli, lookahead, top)
        }
    }
}

/// Filtered candidates and the allowed guesses to score against them
struct Prepared {
    candidates: Vec<Word>,
    allowed: Vec<Word>,
}

/// Run the self-check and filter the answers; `None` if no answer survives
fn prepare(cli: &Cli) -> Result<Option<Prepared>> {
    print_self_check(&self_check()?);

    let history = resolve_history(cli)?;
    print_history(&history);

    let answers = load_list(&cli.answers, "answer")?;
    let summary = summarize_candidates(&answers, &history);
    print_candidate_summary(&summary);

    if summary.is_exhausted() {
        print_no_answers();
        return Ok(None);
    }

    let allowed = load_list(&cli.allowed, "allowed")?;
    Ok(Some(Prepared {
        candidates: summary.candidates,
        allowed,
    }))
}

fn run_rank_command(cli: &Cli, top: usize) -> Result<ExitCode> {
    let Some(prepared) = prepare(cli)? else {
        return Ok(ExitCode::from(EXIT_NO_ANSWERS));
    };

    let config = RankConfig {
        top,
        workers: cli.threads,
    };
    let progress = scoring_progress(prepared.allowed.len(), !cli.no_progress, "Scoring guesses");
    let report = rank_allowed(&prepared.candidates, &prepared.allowed, &config, &progress)?;
    print_rank_report(&report);
    Ok(ExitCode::SUCCESS)
}

fn run_deep_command(cli: &Cli, lookahead: LookaheadConfig, top: usize) -> Result<ExitCode> {
    let Some(prepared) = prepare(cli)? else {
        return Ok(ExitCode::from(EXIT_NO_ANSWERS));
    };

    let config = DeepConfig {
        lookahead,
        top,
        workers: cli.threads,
    };
    let progress = scoring_progress(prepared.allowed.len(), !cli.no_progress, "Searching guesses");
    let report = run_deep(&prepared.candidates, &prepared.allowed, config, &progress)?;
    print_deep_report(&report);
    Ok(ExitCode::SUCCESS)
}

/// History from `-g` flags, or the built-in one
fn resolve_history(cli: &Cli) -> Result<Vec<GuessRecord>> {
    if cli.no_history {
        return Ok(Vec::new());
    }
    if !cli.guesses.is_empty() {
        return Ok(cli.guesses.clone());
    }
    default_history().context("built-in history is malformed")
}

fn load_list(path: &Path, kind: &str) -> Result<Vec<Word>> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to load {kind} list from {}", path.display()))?;
    log::info!("loaded {} {kind} words from {}", words.len(), path.display());
    Ok(words)
}
