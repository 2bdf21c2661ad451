//! Entry validator - occurrence-count rule.

use crate::entry::ValidationEntry;

/// Number of times the entry's character appears in its password (case-sensitive).
pub fn count_occurrences(entry: &ValidationEntry) -> usize {
    let target = entry.match_character();
    entry.password_str().chars().filter(|&c| c == target).count()
}

/// Returns `true` if the occurrence count lies within `min_count..=max_count`.
pub fn validate_entry(entry: &ValidationEntry) -> bool {
    let count = count_occurrences(entry);
    (entry.min_count()..=entry.max_count()).contains(&count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_entry;

    fn is_valid(line: &str) -> bool {
        validate_entry(&parse_entry(line).expect("line should parse"))
    }

    #[test]
    fn test_validate_single_occurrence() {
        assert!(is_valid("1-3 a: abcde"));
    }

    #[test]
    fn test_validate_no_occurrence() {
        assert!(!is_valid("1-3 b: cdefg"));
    }

    #[test]
    fn test_validate_at_max_bound() {
        assert!(is_valid("2-9 c: ccccccccc"));
    }

    #[test]
    fn test_validate_min_equals_max() {
        assert!(is_valid("9-9 c: ccccccccc"));
        assert!(!is_valid("9-9 c: cccccccc"));
    }

    #[test]
    fn test_validate_at_min_bound() {
        assert!(is_valid("2-5 x: axbxc"));
    }

    #[test]
    fn test_validate_above_max() {
        assert!(!is_valid("1-2 d: dddd"));
    }

    #[test]
    fn test_validate_zero_min() {
        assert!(is_valid("0-1 z: abc"));
    }

    #[test]
    fn test_validate_case_sensitive() {
        let entry = parse_entry("1-1 A: aaaA").unwrap();
        assert_eq!(count_occurrences(&entry), 1);
        assert!(validate_entry(&entry));
        assert!(!is_valid("1-3 a: AAA"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_validate_matches_inclusive_bounds(
                min in 0usize..20,
                span in 0usize..20,
                occurrences in 0usize..45,
                letter in proptest::char::range('a', 'z'),
                filler in "[A-Z0-9_]{1,20}",
            ) {
                let max = (min + span).max(1);
                let password = format!("{}{}", letter.to_string().repeat(occurrences), filler);
                let line = format!("{min}-{max} {letter}: {password}");
                let entry = parse_entry(&line).expect("grammar-valid line should parse");

                prop_assert_eq!(count_occurrences(&entry), occurrences);
                prop_assert_eq!(validate_entry(&entry), min <= occurrences && occurrences <= max);
                // Same input, same answer.
                prop_assert_eq!(validate_entry(&entry), validate_entry(&entry));
            }
        }
    }
}
