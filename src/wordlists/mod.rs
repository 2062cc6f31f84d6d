//! Word lists for the anagram game
//!
//! Provides an embedded dictionary compiled into the binary and helpers to
//! load other word lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_trimmed_lowercase() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_distinct() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn covers_every_starter_length() {
        for length in 3..=8 {
            assert!(
                WORDS.iter().any(|w| w.len() == length),
                "no words of length {length}"
            );
        }
    }
}
