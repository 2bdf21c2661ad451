//! Validation entry - one parsed policy line.

use secrecy::{ExposeSecret, SecretString};

/// A policy plus the candidate password it applies to.
///
/// Built by [`crate::parse_entry`]; `max_count >= min_count` always holds.
/// The password is kept behind [`SecretString`] so `Debug` output redacts it.
#[derive(Debug)]
pub struct ValidationEntry {
    min_count: usize,
    max_count: usize,
    match_character: char,
    password: SecretString,
}

impl ValidationEntry {
    pub(crate) fn new(
        min_count: usize,
        max_count: usize,
        match_character: char,
        password: &str,
    ) -> Self {
        Self {
            min_count,
            max_count,
            match_character,
            password: SecretString::new(password.to_string().into()),
        }
    }

    /// Lower bound on occurrences, inclusive.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Upper bound on occurrences, inclusive.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// The single ASCII letter being counted.
    pub fn match_character(&self) -> char {
        self.match_character
    }

    /// The candidate password, still wrapped.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Shorthand for `password().expose_secret()`.
    pub fn password_str(&self) -> &str {
        self.password.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let entry = ValidationEntry::new(1, 3, 'a', "abcde");
        assert_eq!(entry.min_count(), 1);
        assert_eq!(entry.max_count(), 3);
        assert_eq!(entry.match_character(), 'a');
        assert_eq!(entry.password_str(), "abcde");
    }

    #[test]
    fn test_entry_debug_redacts_password() {
        let entry = ValidationEntry::new(1, 3, 'a', "hunter2secret");
        let debug = format!("{:?}", entry);
        assert!(!debug.contains("hunter2secret"));
        assert!(debug.contains("min_count: 1"));
    }
}
