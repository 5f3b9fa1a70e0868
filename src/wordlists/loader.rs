//! Word list loading
//!
//! Lists are newline-separated, one word per line. Blank lines are skipped and
//! surrounding whitespace is trimmed; anything else that is not a valid word
//! is rejected with the offending line number.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised while loading a word list
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    InvalidWord {
        path: PathBuf,
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::InvalidWord {
                path,
                line,
                text,
                source,
            } => write!(
                f,
                "{}:{line}: invalid word '{text}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::InvalidWord` for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle_answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content).map_err(|(line, text, source)| LoadError::InvalidWord {
        path: path.to_path_buf(),
        line,
        text,
        source,
    })?;

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words
///
/// On failure returns the 1-based line number, the offending text and the
/// validation error.
fn parse_lines(content: &str) -> Result<Vec<Word>, (usize, String, WordError)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| Word::new(line).map_err(|e| (number, line.to_string(), e)))
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_list(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_ranker_{}_{name}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_trims_and_skips_blanks() {
        let words = parse_lines("crane\n\n  SLATE \r\nirate\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_lines_reports_line_number() {
        let err = parse_lines("crane\nslate\nsh0rt\n").unwrap_err();
        assert_eq!(err.0, 3);
        assert_eq!(err.1, "sh0rt");
        assert_eq!(err.2, WordError::InvalidCharacters);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_list("valid", "abbey\nthorn\ntacit\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "thorn");
    }

    #[test]
    fn load_from_file_rejects_malformed_line() {
        let path = temp_list("invalid", "abbey\nthorns\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(LoadError::InvalidWord { line, text, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "thorns");
            }
            other => panic!("expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_ranker_does_not_exist.txt");
        assert!(matches!(load_from_file(path), Err(LoadError::Io { .. })));
    }
}
