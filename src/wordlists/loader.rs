//! Word list loading utilities
//!
//! Resolves the `--wordlist` argument to either the embedded dictionary or a
//! file on disk and builds an index from it.

use super::WORDS;
use crate::core::AnagramIndex;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The word list compiled into the binary
    Embedded,
    /// A newline-delimited word file
    File(PathBuf),
}

impl WordSource {
    /// Parse a `--wordlist` value
    ///
    /// `embedded` (or `builtin`) selects the compiled-in list; anything else
    /// is taken as a path.
    ///
    /// # Examples
    /// ```
    /// use anagram_index::wordlists::WordSource;
    ///
    /// assert_eq!(WordSource::from_name("embedded"), WordSource::Embedded);
    /// assert!(matches!(WordSource::from_name("words.txt"), WordSource::File(_)));
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Build an index from this source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a word file cannot be opened or read.
    pub fn load(&self) -> io::Result<AnagramIndex> {
        let index = match self {
            Self::Embedded => AnagramIndex::new(WORDS.iter().copied()),
            Self::File(path) => AnagramIndex::from_file(path)?,
        };
        info!(source = %self, words = index.len(), "loaded dictionary");
        Ok(index)
    }
}

impl std::fmt::Display for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_embedded_aliases() {
        assert_eq!(WordSource::from_name("embedded"), WordSource::Embedded);
        assert_eq!(WordSource::from_name("builtin"), WordSource::Embedded);
    }

    #[test]
    fn from_name_path() {
        assert_eq!(
            WordSource::from_name("data/words.txt"),
            WordSource::File(PathBuf::from("data/words.txt"))
        );
    }

    #[test]
    fn load_embedded() {
        let index = WordSource::Embedded.load().unwrap();
        assert_eq!(index.len(), WORDS.len());
    }

    #[test]
    fn load_from_data_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/words.txt");
        let index = WordSource::File(path).load().unwrap();
        assert_eq!(index.len(), WORDS.len());
    }

    #[test]
    fn load_missing_file_fails() {
        let result = WordSource::from_name("/nonexistent/words.txt").load();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn display_source() {
        assert_eq!(WordSource::Embedded.to_string(), "embedded");
        assert_eq!(WordSource::from_name("words.txt").to_string(), "words.txt");
    }
}
