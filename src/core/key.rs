//! Canonical letter keys
//!
//! A `LetterKey` is a word's characters sorted into ascending order. Two words
//! are anagrams of each other exactly when their keys are equal.

use std::fmt;

/// Order-invariant representation of a word's letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterKey(Box<str>);

impl LetterKey {
    /// Build the key for a word
    ///
    /// # Examples
    /// ```
    /// use anagram_index::core::LetterKey;
    ///
    /// assert_eq!(LetterKey::of("stop"), LetterKey::of("post"));
    /// assert_eq!(LetterKey::of("stop").as_str(), "opst");
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect::<String>().into_boxed_str())
    }

    /// Build the key for `word` with one extra letter appended
    ///
    /// Equivalent to `LetterKey::of(&format!("{word}{letter}"))` without the
    /// intermediate allocation.
    #[must_use]
    pub fn with_letter(word: &str, letter: char) -> Self {
        let mut letters: Vec<char> = word.chars().chain(std::iter::once(letter)).collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect::<String>().into_boxed_str())
    }

    /// Sorted letters as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LetterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_sorts_letters() {
        assert_eq!(LetterKey::of("listen").as_str(), "eilnst");
        assert_eq!(LetterKey::of("").as_str(), "");
    }

    #[test]
    fn anagrams_share_a_key() {
        assert_eq!(LetterKey::of("listen"), LetterKey::of("silent"));
        assert_eq!(LetterKey::of("listen"), LetterKey::of("enlist"));
        assert_eq!(LetterKey::of("pears"), LetterKey::of("spare"));
    }

    #[test]
    fn different_letter_counts_never_collide() {
        assert_ne!(LetterKey::of("aab"), LetterKey::of("abb"));
        assert_ne!(LetterKey::of("ab"), LetterKey::of("aab"));
        assert_ne!(LetterKey::of("tin"), LetterKey::of("tint"));
    }

    #[test]
    fn with_letter_matches_concatenation() {
        for letter in 'a'..='z' {
            assert_eq!(
                LetterKey::with_letter("pear", letter),
                LetterKey::of(&format!("pear{letter}"))
            );
        }
    }

    #[test]
    fn key_display() {
        assert_eq!(format!("{}", LetterKey::of("cab")), "abc");
    }
}
