//! Display functions for command results

use super::formatters::{letter_tiles, starter_bar};
use crate::commands::{AnagramsResult, CheckResult, ExtensionResult, StarterReport, SurveyResult};
use colored::Colorize;

/// Print the anagram group of a word
pub fn print_anagrams_result(result: &AnagramsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of {} (letters: {})",
        result.word.to_uppercase().bright_yellow().bold(),
        result.key
    );
    println!("{}", "─".repeat(60).cyan());

    if result.anagrams.is_empty() {
        println!("{}", "No words share these letters.".red());
        return;
    }
    for word in &result.anagrams {
        let marker = if *word == result.word { "*" } else { " " };
        println!("  {marker} {}", word.to_uppercase());
    }
}

/// Print the one-more-letter anagrams of a word
pub fn print_extension_result(result: &ExtensionResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} + one letter",
        letter_tiles(&result.word).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (letter, group) in &result.groups {
        let words: Vec<String> = group.iter().map(|w| w.to_uppercase()).collect();
        println!("  +{}  {}", letter.to_string().bright_cyan(), words.join(", "));
    }

    println!();
    let summary = format!(
        "{} anagrams (starter threshold: {})",
        result.total, result.min_anagrams
    );
    if result.is_starter() {
        println!("{}", format!("✅ {summary}").green().bold());
    } else {
        println!("{}", format!("❌ {summary}").red().bold());
    }
}

/// Print the verdict of a word check
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_uppercase();
    let base = result.base.to_uppercase();

    if result.is_good() {
        println!("{}", format!("✅ {word} is a good word for {base}").green().bold());
        return;
    }

    println!("{}", format!("❌ {word} is not a good word for {base}").red().bold());
    if !result.in_dictionary {
        println!("   {word} is not in the dictionary");
    }
    if result.contains_base {
        println!("   {word} contains {base}");
    }
}

/// Print a sequence of starter picks
pub fn print_starter_report(report: &StarterReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STARTER WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, pick) in report.picks.iter().enumerate() {
        println!(
            "  {}. {:<10} length {}  {} extensions",
            (i + 1).to_string().bright_black(),
            pick.word.to_uppercase().bright_white().bold(),
            pick.length,
            pick.extensions.to_string().green()
        );
    }

    if let Some(error) = &report.error {
        println!("\n{} {error}", "Stopped:".red().bold());
    }
    println!("\nNext starter length: {}", report.final_length);
}

/// Print a dictionary survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Words:            {}", result.total_words);
    println!("   Starter minimum:  {} anagrams", result.min_anagrams);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Starters by length:".bright_cyan().bold());
    for row in &result.rows {
        let pct = if row.words == 0 {
            0.0
        } else {
            (row.starters as f64 / row.words as f64) * 100.0
        };
        println!(
            "   {:2}: {} {:5}/{:<5} ({pct:5.1}%)",
            row.length,
            starter_bar(row.starters, row.words, 30).green(),
            row.starters,
            row.words
        );
    }
}
