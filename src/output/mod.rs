//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagrams_result, print_check_result, print_extension_result, print_starter_report,
    print_survey_result,
};
