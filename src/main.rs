//! Anagrams - CLI
//!
//! Dictionary queries and a text-mode anagram game.

use anagram_index::{
    commands::{check_word, find_anagrams, find_extensions, pick_starters, run_play, run_survey},
    core::{AnagramIndex, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_NUM_ANAGRAMS, StarterConfig},
    logging::{LogConfig, init_logging},
    output::{
        print_anagrams_result, print_check_result, print_extension_result, print_starter_report,
        print_survey_result,
    },
    wordlists::WordSource,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(
    name = "anagrams",
    about = "Anagram dictionary queries and word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Minimum one-letter anagrams a starter word needs
    #[arg(long, global = true, default_value_t = MIN_NUM_ANAGRAMS)]
    min_anagrams: usize,

    /// Word length the starter search begins at
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    start_length: usize,

    /// Longest word length the starter search advances to
    #[arg(long, global = true, default_value_t = MAX_WORD_LENGTH)]
    max_length: usize,

    /// Seed for the starter search (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the anagram game (default)
    Play,

    /// Pick starter words in succession
    Starter {
        /// Number of starter words to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// List the anagrams of a word
    Anagrams {
        /// Word to look up
        word: String,
    },

    /// List the anagrams of a word plus one letter
    Extend {
        /// Word to extend
        word: String,
    },

    /// Check whether a word is a valid play against a base word
    Check {
        /// Word to check
        word: String,
        /// Starter word it is played against
        base: String,
    },

    /// Count starter candidates at each word length
    Survey,
}

/// Load the dictionary and apply the starter settings
fn load_index(cli: &Cli) -> Result<AnagramIndex> {
    let source = WordSource::from_name(&cli.wordlist);
    let config = StarterConfig::new(cli.min_anagrams, cli.start_length, cli.max_length);

    let index = source
        .load()
        .with_context(|| format!("failed to load word list '{source}'"))?
        .with_config(config);

    Ok(match cli.seed {
        Some(seed) => index.with_seed(seed),
        None => index,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose))?;

    let mut index = load_index(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&mut index, io::stdin().lock(), io::stdout().lock()),
        Commands::Starter { count } => {
            let report = pick_starters(&mut index, count);
            print_starter_report(&report);
            Ok(())
        }
        Commands::Anagrams { word } => {
            print_anagrams_result(&find_anagrams(&index, &word));
            Ok(())
        }
        Commands::Extend { word } => {
            print_extension_result(&find_extensions(&index, &word));
            Ok(())
        }
        Commands::Check { word, base } => {
            print_check_result(&check_word(&index, &word, &base));
            Ok(())
        }
        Commands::Survey => {
            print_survey_result(&run_survey(&index, true));
            Ok(())
        }
    }
}
