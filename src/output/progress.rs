//! Progress reporting for long scoring runs

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Progress bar for `len` units of work, or a hidden one when not wanted
#[must_use]
pub fn scoring_progress(len: usize, visible: bool, message: &'static str) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar().template(TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(e) => log::warn!("progress template rejected: {e}"),
    }
    pb.set_message(message);
    pb
}
