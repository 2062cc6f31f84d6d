//! In-memory anagram dictionary
//!
//! Groups words by their canonical letter key and by length, and picks
//! "starter" words that have enough one-letter extensions to make a game
//! round worth playing.

use super::{IndexError, LetterKey, StarterConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Anagram dictionary built once from a word list
///
/// All lookups are read-only. The only mutable state is the word-length
/// cursor, which is advanced by [`AnagramIndex::pick_good_starter_word`] and
/// nothing else (apart from an explicit [`AnagramIndex::reset_word_length`]).
#[derive(Debug)]
pub struct AnagramIndex {
    words: FxHashSet<String>,
    groups: FxHashMap<LetterKey, Vec<String>>,
    by_length: FxHashMap<usize, Vec<String>>,
    config: StarterConfig,
    word_length: usize,
    rng: StdRng,
}

impl AnagramIndex {
    /// Build an index from a sequence of words
    ///
    /// Each entry is trimmed of surrounding whitespace; entries that are
    /// empty after trimming are skipped. No character validation is done.
    ///
    /// # Examples
    /// ```
    /// use anagram_index::core::AnagramIndex;
    ///
    /// let index = AnagramIndex::new(["stop", "post", "tops", "pots"]);
    /// assert_eq!(index.anagrams("spot"), ["stop", "post", "tops", "pots"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::empty();
        let mut ingested = 0usize;

        for raw in words {
            let word = raw.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            ingested += 1;

            index.words.insert(word.to_string());
            index
                .by_length
                .entry(word.chars().count())
                .or_default()
                .push(word.to_string());
            index
                .groups
                .entry(LetterKey::of(word))
                .or_default()
                .push(word.to_string());
        }

        debug!(
            ingested,
            distinct = index.words.len(),
            groups = index.groups.len(),
            lengths = index.by_length.len(),
            "built anagram index"
        );

        index
    }

    /// Build an index from newline-delimited text
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised while reading lines. No partial
    /// index is produced.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::new(lines))
    }

    /// Build an index from a word-list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn empty() -> Self {
        let config = StarterConfig::default();
        Self {
            words: FxHashSet::default(),
            groups: FxHashMap::default(),
            by_length: FxHashMap::default(),
            config,
            word_length: config.start_length,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the starter-search settings and reset the cursor
    #[must_use]
    pub fn with_config(mut self, config: StarterConfig) -> Self {
        self.config = config;
        self.word_length = config.start_length;
        self
    }

    /// Seed the random source used by the starter search
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &StarterConfig {
        &self.config
    }

    /// Current value of the word-length cursor
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Move the cursor back to the configured start length
    pub fn reset_word_length(&mut self) {
        self.word_length = self.config.start_length;
    }

    /// Words of a given length, in ingestion order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// All word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Check whether `word` is a valid play against `base`
    ///
    /// True when `word` is in the dictionary and does not contain `base` as a
    /// substring, which rules out the base word with letters tacked on.
    ///
    /// # Examples
    /// ```
    /// use anagram_index::core::AnagramIndex;
    ///
    /// let index = AnagramIndex::new(["listen", "eaten"]);
    /// assert!(index.is_good_word("listen", "tin"));
    /// assert!(!index.is_good_word("eaten", "eat"));
    /// ```
    #[must_use]
    pub fn is_good_word(&self, word: &str, base: &str) -> bool {
        self.words.contains(word) && !word.contains(base)
    }

    /// Every dictionary word with the same letters as `word`
    ///
    /// Includes `word` itself when it is in the dictionary. Returns an empty
    /// slice when no word shares its letters.
    #[must_use]
    pub fn anagrams(&self, word: &str) -> &[String] {
        self.groups
            .get(&LetterKey::of(word))
            .map_or(&[], Vec::as_slice)
    }

    /// Anagram groups of `word` plus each letter `a..=z`
    ///
    /// Letters whose group is absent are left out; order is alphabetical.
    #[must_use]
    pub fn extensions_by_letter(&self, word: &str) -> Vec<(char, &[String])> {
        ('a'..='z')
            .filter_map(|letter| {
                self.groups
                    .get(&LetterKey::with_letter(word, letter))
                    .map(|group| (letter, group.as_slice()))
            })
            .collect()
    }

    /// Anagrams of `word` with one more letter appended
    ///
    /// Results are ordered by the appended letter, then by ingestion order
    /// within each group. Nothing is deduplicated.
    #[must_use]
    pub fn anagrams_with_one_more_letter(&self, word: &str) -> Vec<String> {
        self.extensions_by_letter(word)
            .into_iter()
            .flat_map(|(_, group)| group.iter().cloned())
            .collect()
    }

    /// Same as `anagrams_with_one_more_letter(word).len()` without collecting
    #[must_use]
    pub fn count_anagrams_with_one_more_letter(&self, word: &str) -> usize {
        ('a'..='z')
            .filter_map(|letter| self.groups.get(&LetterKey::with_letter(word, letter)))
            .map(Vec::len)
            .sum()
    }

    /// Whether `word` has enough one-letter extensions to start a round
    #[must_use]
    pub fn is_starter_candidate(&self, word: &str) -> bool {
        self.count_anagrams_with_one_more_letter(word) >= self.config.min_anagrams
    }

    /// Pick a starter word of the current cursor length
    ///
    /// Starts at a random position in the bucket of words with the cursor's
    /// length and scans forward, wrapping once, for the first word with at
    /// least `min_anagrams` one-letter extensions. On success the cursor
    /// advances by one, capped at `max_length`.
    ///
    /// # Errors
    ///
    /// - [`IndexError::NoWordsOfLength`] if no word has the cursor's length
    /// - [`IndexError::NoStarterWord`] if a full cycle finds no candidate
    ///
    /// The cursor is left unchanged on error.
    pub fn pick_good_starter_word(&mut self) -> Result<String, IndexError> {
        let length = self.word_length;
        let size = self.words_of_length(length).len();
        if size == 0 {
            return Err(IndexError::NoWordsOfLength { length });
        }

        let start = self.rng.random_range(0..size);
        debug!(length, start, size, "searching for starter word");

        let bucket = self.words_of_length(length);
        let picked = (0..size)
            .map(|offset| &bucket[(start + offset) % size])
            .find(|word| {
                let count = self.count_anagrams_with_one_more_letter(word);
                trace!(%word, count, "starter candidate");
                count >= self.config.min_anagrams
            })
            .cloned()
            .ok_or(IndexError::NoStarterWord {
                length,
                min_anagrams: self.config.min_anagrams,
            })?;

        if self.word_length < self.config.max_length {
            self.word_length += 1;
        }
        debug!(%picked, next_length = self.word_length, "picked starter word");

        Ok(picked)
    }
}

impl<S: AsRef<str>> FromIterator<S> for AnagramIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
