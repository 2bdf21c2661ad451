//! Input loading module
//!
//! Resolves the entry file location and reads it into memory in one pass.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the default input location.
pub const INPUT_PATH_ENV: &str = "PWD_POLICY_INPUT_PATH";

/// Fallback input file, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "./exercise_part_one_input.txt";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read input file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Returns the input file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_INPUT_PATH`
/// 2. Default path `./exercise_part_one_input.txt`
pub fn get_input_path() -> PathBuf {
    std::env::var(INPUT_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_PATH))
}

/// Reads the whole input file and splits it on `\n`.
///
/// A final newline yields a trailing empty line, which the parser rejects.
/// Use [`drop_final_empty_line`] to filter it out.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read (including non UTF-8 content)
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Input loading FAILED: FileNotFound {}", path.display());
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let lines = split_lines(&content);

    #[cfg(feature = "tracing")]
    tracing::info!("Input loaded: {} lines from {:?}", lines.len(), path);

    Ok(lines)
}

/// Splits raw content into lines on `\n`, keeping empty segments.
///
/// A `\r` ending a segment is dropped, so CRLF files read the same as LF ones.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

/// Removes the single empty line left behind by a trailing newline, if any.
pub fn drop_final_empty_line(lines: &mut Vec<String>) {
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
}
