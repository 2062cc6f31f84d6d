//! Errors raised by dictionary queries

use thiserror::Error;

/// Error type for starter-word selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The dictionary holds no words of the requested length
    #[error("dictionary has no words of length {length}")]
    NoWordsOfLength { length: usize },

    /// Every word of the requested length was checked and none qualified
    #[error("no word of length {length} has at least {min_anagrams} one-letter anagrams")]
    NoStarterWord { length: usize, min_anagrams: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            IndexError::NoWordsOfLength { length: 4 }.to_string(),
            "dictionary has no words of length 4"
        );
        assert_eq!(
            IndexError::NoStarterWord {
                length: 3,
                min_anagrams: 5
            }
            .to_string(),
            "no word of length 3 has at least 5 one-letter anagrams"
        );
    }
}
