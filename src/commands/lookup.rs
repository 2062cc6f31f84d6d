//! Dictionary lookups: anagram groups, one-letter extensions, word checks

use crate::core::{AnagramIndex, LetterKey};

/// Anagram group of a word
pub struct AnagramsResult {
    pub word: String,
    pub key: LetterKey,
    pub anagrams: Vec<String>,
}

/// One-more-letter anagrams of a word, grouped by the added letter
pub struct ExtensionResult {
    pub word: String,
    pub groups: Vec<(char, Vec<String>)>,
    pub total: usize,
    pub min_anagrams: usize,
}

impl ExtensionResult {
    /// Whether the word has enough extensions to start a round
    #[must_use]
    pub const fn is_starter(&self) -> bool {
        self.total >= self.min_anagrams
    }
}

/// Verdict of `is_good_word` with its two conditions broken out
pub struct CheckResult {
    pub word: String,
    pub base: String,
    pub in_dictionary: bool,
    pub contains_base: bool,
}

impl CheckResult {
    #[must_use]
    pub const fn is_good(&self) -> bool {
        self.in_dictionary && !self.contains_base
    }
}

/// Look up the anagram group of `word`
#[must_use]
pub fn find_anagrams(index: &AnagramIndex, word: &str) -> AnagramsResult {
    let word = word.trim().to_lowercase();
    AnagramsResult {
        key: LetterKey::of(&word),
        anagrams: index.anagrams(&word).to_vec(),
        word,
    }
}

/// Look up the anagrams of `word` plus one letter
#[must_use]
pub fn find_extensions(index: &AnagramIndex, word: &str) -> ExtensionResult {
    let word = word.trim().to_lowercase();
    let groups: Vec<(char, Vec<String>)> = index
        .extensions_by_letter(&word)
        .into_iter()
        .map(|(letter, group)| (letter, group.to_vec()))
        .collect();
    let total = groups.iter().map(|(_, group)| group.len()).sum();

    ExtensionResult {
        word,
        groups,
        total,
        min_anagrams: index.config().min_anagrams,
    }
}

/// Check whether `word` is a valid play against `base`
#[must_use]
pub fn check_word(index: &AnagramIndex, word: &str, base: &str) -> CheckResult {
    let word = word.trim().to_lowercase();
    let base = base.trim().to_lowercase();
    CheckResult {
        in_dictionary: index.contains(&word),
        contains_base: word.contains(&base),
        word,
        base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> AnagramIndex {
        AnagramIndex::new(["pears", "reaps", "drape", "spare", "listen", "silent", "eaten"])
    }

    #[test]
    fn find_anagrams_normalizes_input() {
        let result = find_anagrams(&index(), " Tinsel ");
        assert_eq!(result.word, "tinsel");
        assert_eq!(result.key.as_str(), "eilnst");
        assert_eq!(result.anagrams, ["listen", "silent"]);
    }

    #[test]
    fn find_anagrams_unknown_word() {
        let result = find_anagrams(&index(), "zzz");
        assert!(result.anagrams.is_empty());
    }

    #[test]
    fn find_extensions_groups_by_letter() {
        let result = find_extensions(&index(), "pear");

        assert_eq!(result.total, 4);
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0], ('d', vec!["drape".to_string()]));
        assert_eq!(result.groups[1].0, 's');
        assert_eq!(result.groups[1].1, ["pears", "reaps", "spare"]);
        assert!(!result.is_starter());
    }

    #[test]
    fn find_extensions_starter_threshold() {
        let index = AnagramIndex::new(["pears", "reaps", "drape", "spare", "spear"]);
        assert!(find_extensions(&index, "pear").is_starter());
    }

    #[test]
    fn check_word_reasons() {
        let index = index();

        let good = check_word(&index, "listen", "tin");
        assert!(good.in_dictionary);
        assert!(!good.contains_base);
        assert!(good.is_good());

        let extended = check_word(&index, "eaten", "eat");
        assert!(extended.in_dictionary);
        assert!(extended.contains_base);
        assert!(!extended.is_good());

        let unknown = check_word(&index, "enlist", "tin");
        assert!(!unknown.in_dictionary);
        assert!(!unknown.is_good());
    }

    #[test]
    fn check_word_agrees_with_index() {
        let index = index();
        for (word, base) in [("listen", "tin"), ("eaten", "eat"), ("spare", "pear")] {
            assert_eq!(
                check_word(&index, word, base).is_good(),
                index.is_good_word(word, base)
            );
        }
    }
}
