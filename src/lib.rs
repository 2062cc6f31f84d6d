//! Anagram Index
//!
//! A dictionary index for anagram word games: anagram groups, one-letter
//! extensions and starter-word selection.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_index::core::AnagramIndex;
//!
//! let index = AnagramIndex::new(["pears", "reaps", "drape", "spare"]);
//!
//! let extensions = index.anagrams_with_one_more_letter("pear");
//! assert_eq!(extensions, ["drape", "pears", "reaps", "spare"]);
//! assert!(index.is_good_word("spare", "pear"));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
