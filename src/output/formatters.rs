//! Formatting utilities for terminal output

/// Render a word as uppercase letter tiles, e.g. `[P][E][A][R]`
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    word.chars()
        .flat_map(char::to_uppercase)
        .map(|c| format!("[{c}]"))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of words at a length that qualify as starters, as a bar
#[must_use]
pub fn starter_bar(starters: usize, words: usize, width: usize) -> String {
    create_progress_bar(starters as f64, words as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_tiles_uppercase() {
        assert_eq!(letter_tiles("pear"), "[P][E][A][R]");
        assert_eq!(letter_tiles(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn starter_bar_ratio() {
        assert_eq!(starter_bar(1, 4, 8), "██░░░░░░");
        assert_eq!(starter_bar(0, 0, 3), "░░░");
    }
}
