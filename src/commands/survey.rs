//! Dictionary survey - starter candidates per word length
//!
//! Checks every word against the starter threshold and tallies the results
//! by length.

use crate::core::AnagramIndex;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Tally for one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthStats {
    pub length: usize,
    pub words: usize,
    pub starters: usize,
}

/// Survey of a whole dictionary
#[derive(Debug)]
pub struct SurveyResult {
    pub total_words: usize,
    pub rows: Vec<LengthStats>,
    pub min_anagrams: usize,
    pub duration: Duration,
}

impl SurveyResult {
    /// Tally for a length, if the dictionary has words of that length
    #[must_use]
    pub fn row(&self, length: usize) -> Option<&LengthStats> {
        self.rows.iter().find(|row| row.length == length)
    }
}

/// Count starter candidates at every word length
///
/// Words are counted as listed, so repeated entries count more than once.
#[must_use]
pub fn run_survey(index: &AnagramIndex, show_progress: bool) -> SurveyResult {
    let start = Instant::now();
    let lengths = index.lengths();
    let total: usize = lengths.iter().map(|&l| index.words_of_length(l).len()).sum();

    let pb = if show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let rows = lengths
        .into_iter()
        .map(|length| {
            pb.set_message(format!("length {length}"));
            let bucket = index.words_of_length(length);
            let starters = bucket
                .iter()
                .inspect(|_| pb.inc(1))
                .filter(|word| index.is_starter_candidate(word))
                .count();
            LengthStats {
                length,
                words: bucket.len(),
                starters,
            }
        })
        .collect();

    pb.finish_and_clear();

    SurveyResult {
        total_words: total,
        rows,
        min_anagrams: index.config().min_anagrams,
        duration: start.elapsed(),
    }
}
