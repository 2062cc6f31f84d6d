//! Starter-word picking command
//!
//! Draws several starter words in a row so the cursor progression is visible.

use crate::core::{AnagramIndex, IndexError};

/// One successful pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterPick {
    pub word: String,
    pub length: usize,
    pub extensions: usize,
}

/// Picks made before stopping, and the error that stopped them if any
#[derive(Debug)]
pub struct StarterReport {
    pub picks: Vec<StarterPick>,
    pub error: Option<IndexError>,
    pub final_length: usize,
}

/// Pick up to `count` starter words in succession
///
/// Stops at the first failed pick; earlier picks are kept in the report.
pub fn pick_starters(index: &mut AnagramIndex, count: usize) -> StarterReport {
    let mut picks = Vec::with_capacity(count);
    let mut error = None;

    for _ in 0..count {
        let length = index.word_length();
        match index.pick_good_starter_word() {
            Ok(word) => {
                let extensions = index.count_anagrams_with_one_more_letter(&word);
                picks.push(StarterPick {
                    word,
                    length,
                    extensions,
                });
            }
            Err(e) => {
                error = Some(e);
                break;
            }
        }
    }

    StarterReport {
        picks,
        error,
        final_length: index.word_length(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn picks_walk_up_the_lengths() {
        let mut index = AnagramIndex::new(WORDS.iter().copied()).with_seed(11);
        let report = pick_starters(&mut index, 6);

        assert!(report.error.is_none());
        let lengths: Vec<usize> = report.picks.iter().map(|p| p.length).collect();
        assert_eq!(lengths, [3, 4, 5, 6, 7, 7]);
        assert_eq!(report.final_length, 7);

        for pick in &report.picks {
            assert_eq!(pick.word.len(), pick.length);
            assert!(pick.extensions >= 5);
        }
    }

    #[test]
    fn stops_at_first_error() {
        let mut index = AnagramIndex::new(["tap", "pats", "spat", "taps", "past", "apts"])
            .with_seed(5);
        let report = pick_starters(&mut index, 3);

        assert_eq!(report.picks.len(), 1);
        assert_eq!(report.picks[0].word, "tap");
        assert_eq!(
            report.error,
            Some(IndexError::NoStarterWord {
                length: 4,
                min_anagrams: 5
            })
        );
        assert_eq!(report.final_length, 4);
    }

    #[test]
    fn zero_count_picks_nothing() {
        let mut index = AnagramIndex::new(WORDS.iter().copied());
        let report = pick_starters(&mut index, 0);
        assert!(report.picks.is_empty());
        assert!(report.error.is_none());
        assert_eq!(report.final_length, 3);
    }
}
