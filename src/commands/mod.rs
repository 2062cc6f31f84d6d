//! Command implementations

pub mod lookup;
pub mod play;
pub mod starter;
pub mod survey;

pub use lookup::{
    AnagramsResult, CheckResult, ExtensionResult, check_word, find_anagrams, find_extensions,
};
pub use play::{GuessOutcome, RejectReason, Round, run_play};
pub use starter::{StarterPick, StarterReport, pick_starters};
pub use survey::{LengthStats, SurveyResult, run_survey};
