//! Entry parser - turns a raw `<min>-<max> <char>: <password>` line into a
//! [`ValidationEntry`].

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::entry::ValidationEntry;

// Anchored on both ends; max_count may not start with 0.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<min_count>[0-9]+)-(?P<max_count>[1-9][0-9]*) (?P<match_character>[A-Za-z]): (?P<password_string>\w+)$",
    )
    .unwrap()
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not match `<min>-<max> <char>: <password>`")]
    MalformedLine,
    #[error("impossible bounds: max {max_count} is below min {min_count}")]
    ImpossibleBounds { min_count: usize, max_count: usize },
    #[error("occurrence bound does not fit in usize")]
    BoundOverflow,
}

/// Parses one policy line.
///
/// # Errors
///
/// - [`ParseError::MalformedLine`] if the line does not match the grammar
/// - [`ParseError::ImpossibleBounds`] if it matches but `max < min`
/// - [`ParseError::BoundOverflow`] if a bound has too many digits
pub fn parse_entry(line: &str) -> Result<ValidationEntry, ParseError> {
    let caps = ENTRY_RE.captures(line).ok_or(ParseError::MalformedLine)?;

    let min_count = parse_bound(&caps["min_count"])?;
    let max_count = parse_bound(&caps["max_count"])?;

    if max_count < min_count {
        return Err(ParseError::ImpossibleBounds {
            min_count,
            max_count,
        });
    }

    // The group is exactly one ASCII letter.
    let match_character = caps["match_character"]
        .chars()
        .next()
        .ok_or(ParseError::MalformedLine)?;

    Ok(ValidationEntry::new(
        min_count,
        max_count,
        match_character,
        &caps["password_string"],
    ))
}

fn parse_bound(digits: &str) -> Result<usize, ParseError> {
    digits.parse().map_err(|_| ParseError::BoundOverflow)
}
