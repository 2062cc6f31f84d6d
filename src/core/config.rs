//! Starter-word search settings

/// Minimum one-more-letter anagrams a starter word must have
pub const MIN_NUM_ANAGRAMS: usize = 5;

/// Word length the starter search begins at
pub const DEFAULT_WORD_LENGTH: usize = 3;

/// Longest word length the starter search advances to
pub const MAX_WORD_LENGTH: usize = 7;

/// Settings for `AnagramIndex::pick_good_starter_word`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterConfig {
    /// Threshold on `anagrams_with_one_more_letter(word).len()`
    pub min_anagrams: usize,
    /// Initial value of the word-length cursor
    pub start_length: usize,
    /// Cap on the word-length cursor
    pub max_length: usize,
}

impl StarterConfig {
    /// Create a new starter configuration
    ///
    /// A `max_length` below `start_length` is raised to `start_length`.
    #[must_use]
    pub const fn new(min_anagrams: usize, start_length: usize, max_length: usize) -> Self {
        let max_length = if max_length < start_length {
            start_length
        } else {
            max_length
        };
        Self {
            min_anagrams,
            start_length,
            max_length,
        }
    }
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self::new(MIN_NUM_ANAGRAMS, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StarterConfig::default();
        assert_eq!(config.min_anagrams, 5);
        assert_eq!(config.start_length, 3);
        assert_eq!(config.max_length, 7);
    }

    #[test]
    fn max_length_raised_to_start() {
        let config = StarterConfig::new(5, 6, 4);
        assert_eq!(config.start_length, 6);
        assert_eq!(config.max_length, 6);
    }
}
