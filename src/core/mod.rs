//! Core dictionary types
//!
//! The anagram index, its canonical keys, configuration and error type.

mod config;
mod error;
mod index;
mod key;

pub use config::{DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_NUM_ANAGRAMS, StarterConfig};
pub use error::IndexError;
pub use index::AnagramIndex;
pub use key::LetterKey;
