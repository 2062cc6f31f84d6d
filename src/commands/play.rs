//! Text-mode anagram game
//!
//! Each round shows a starter word; the player finds the dictionary words
//! made from its letters plus one more.

use crate::core::{AnagramIndex, IndexError};
use anyhow::Result;
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};
use tracing::debug;

/// Why a guess was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotInDictionary,
    ContainsBase,
    NotAnExtension,
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Found,
    AlreadyFound,
    Rejected(RejectReason),
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct Round {
    base: String,
    targets: Vec<String>,
    found: Vec<String>,
}

impl Round {
    /// Create a round for an explicit base word
    ///
    /// Targets are the base's one-more-letter anagrams that pass
    /// `is_good_word`, each listed once.
    #[must_use]
    pub fn new(index: &AnagramIndex, base: impl Into<String>) -> Self {
        let base = base.into();
        let mut seen = FxHashSet::default();
        let targets = index
            .anagrams_with_one_more_letter(&base)
            .into_iter()
            .filter(|word| index.is_good_word(word, &base))
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self {
            base,
            targets,
            found: Vec::new(),
        }
    }

    /// Start a round from the next starter word
    ///
    /// # Errors
    ///
    /// Propagates the starter search failure.
    pub fn start(index: &mut AnagramIndex) -> Result<Self, IndexError> {
        let base = index.pick_good_starter_word()?;
        Ok(Self::new(index, base))
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Targets not yet found, in target order
    #[must_use]
    pub fn remaining(&self) -> Vec<&str> {
        self.targets
            .iter()
            .filter(|t| !self.found.contains(*t))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }

    /// Score a guess against this round
    ///
    /// The guess is trimmed and lowercased first.
    pub fn guess(&mut self, index: &AnagramIndex, word: &str) -> GuessOutcome {
        let word = word.trim().to_lowercase();

        if !index.is_good_word(&word, &self.base) {
            let reason = if index.contains(&word) {
                RejectReason::ContainsBase
            } else {
                RejectReason::NotInDictionary
            };
            return GuessOutcome::Rejected(reason);
        }
        if !self.targets.contains(&word) {
            return GuessOutcome::Rejected(RejectReason::NotAnExtension);
        }
        if self.found.contains(&word) {
            return GuessOutcome::AlreadyFound;
        }

        self.found.push(word);
        GuessOutcome::Found
    }
}

/// Run the interactive game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    index: &mut AnagramIndex,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{}", "    A N A G R A M S".bright_green().bold())?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "\nMake words from the starter's letters plus one more letter."
    )?;
    writeln!(
        output,
        "Commands: 'reveal' to give up the round, 'new' to skip, 'quit' to exit\n"
    )?;

    loop {
        let mut round = match Round::start(index) {
            Ok(round) => round,
            Err(e) if index.word_length() > index.config().start_length => {
                debug!(error = %e, "starter lengths exhausted, back to the shortest");
                index.reset_word_length();
                continue;
            }
            Err(e) => {
                writeln!(output, "{} {e}", "No more rounds:".red().bold())?;
                return Ok(());
            }
        };
        debug!(base = round.base(), targets = round.targets().len(), "new round");

        writeln!(output, "{}", "─".repeat(60).cyan())?;
        writeln!(
            output,
            "Starter: {}  ({} words to find)",
            round.base().to_uppercase().bright_yellow().bold(),
            round.targets().len()
        )?;
        writeln!(output, "{}", "─".repeat(60).cyan())?;

        loop {
            let Some(line) = read_guess(&mut input, &mut output)? else {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "" => {}
                "quit" | "q" | "exit" => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                "new" | "n" => break,
                "reveal" | "give up" | "r" => {
                    write_remaining(&mut output, &round)?;
                    break;
                }
                guess => match round.guess(index, guess) {
                    GuessOutcome::Found => {
                        writeln!(
                            output,
                            "{} {} ({}/{})",
                            "✓".green().bold(),
                            guess.to_uppercase(),
                            round.found().len(),
                            round.targets().len()
                        )?;
                        if round.is_complete() {
                            writeln!(
                                output,
                                "\n{}\n",
                                "🎉 Round complete! Every word found.".bright_green().bold()
                            )?;
                            break;
                        }
                    }
                    GuessOutcome::AlreadyFound => {
                        writeln!(output, "{} already found", guess.to_uppercase().yellow())?;
                    }
                    GuessOutcome::Rejected(reason) => {
                        writeln!(
                            output,
                            "{} {}",
                            "✗".red().bold(),
                            reject_message(reason, round.base())
                        )?;
                    }
                },
            }
        }
    }
}

fn reject_message(reason: RejectReason, base: &str) -> String {
    match reason {
        RejectReason::NotInDictionary => "not in the dictionary".to_string(),
        RejectReason::ContainsBase => format!("cannot just add letters around '{base}'"),
        RejectReason::NotAnExtension => format!("not '{base}' plus one letter"),
    }
}

fn write_remaining<W: Write>(output: &mut W, round: &Round) -> Result<()> {
    let remaining = round.remaining();
    if remaining.is_empty() {
        return Ok(());
    }
    writeln!(output, "\nYou missed:")?;
    for word in remaining {
        writeln!(output, "  • {}", word.to_uppercase())?;
    }
    writeln!(output)?;
    Ok(())
}

/// Prompt for and read one line, `None` at end of input
fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "Guess: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
