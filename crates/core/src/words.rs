//! Word manager - chain rule validation and the recent word history.
//!
//! The history is a fixed-capacity FIFO of `MAX_RECENT_WORDS + 1` entries. Words
//! are stored with their original casing; every comparison is case-insensitive.

use arrayvec::ArrayVec;

use crate::types::{RECENT_DELIMITER, WORD_HISTORY_CAPACITY};

/// Why a submitted word was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    Empty,
    DuplicateOfRecent,
    ChainRuleViolation,
}

impl Rejection {
    /// Empty input is reported but never penalised.
    pub fn is_strike(&self) -> bool {
        !matches!(self, Rejection::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// Which accepted words a new word may not repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Every word still held in the bounded history.
    #[default]
    FullHistory,
    /// Only the immediately preceding word.
    PreviousWord,
}

#[derive(Debug, Clone, Default)]
pub struct WordManager {
    history: ArrayVec<String, WORD_HISTORY_CAPACITY>,
    policy: DuplicatePolicy,
}

impl WordManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            history: ArrayVec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Validate `word` and record it when accepted.
    pub fn submit(&mut self, word: &str) -> Outcome {
        if word.is_empty() {
            return Outcome::Rejected(Rejection::Empty);
        }
        if self.is_duplicate(word) {
            return Outcome::Rejected(Rejection::DuplicateOfRecent);
        }
        if let Some(previous) = self.last_word() {
            if !chains(previous, word) {
                return Outcome::Rejected(Rejection::ChainRuleViolation);
            }
        }

        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(word.to_string());
        Outcome::Accepted
    }

    /// Accepted words, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_word(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// History joined with [`RECENT_DELIMITER`], newest last.
    pub fn recent_words_display(&self) -> String {
        self.history.join(RECENT_DELIMITER)
    }

    fn is_duplicate(&self, word: &str) -> bool {
        match self.policy {
            DuplicatePolicy::FullHistory => self.history.iter().any(|w| same_word(w, word)),
            DuplicatePolicy::PreviousWord => self.last_word().is_some_and(|w| same_word(w, word)),
        }
    }
}

/// True when `next` starts with the letter `previous` ends with.
pub fn chains(previous: &str, next: &str) -> bool {
    match (previous.chars().last(), next.chars().next()) {
        (Some(last), Some(first)) => last.to_lowercase().eq(first.to_lowercase()),
        _ => false,
    }
}

fn same_word(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_RECENT_WORDS;

    #[test]
    fn test_opening_word_accepted() {
        let mut words = WordManager::new();
        assert_eq!(words.submit("dog"), Outcome::Accepted);
        assert_eq!(words.last_word(), Some("dog"));
    }

    #[test]
    fn test_empty_rejected() {
        let mut words = WordManager::new();
        assert_eq!(words.submit(""), Outcome::Rejected(Rejection::Empty));
        assert!(words.is_empty());
        assert!(!Rejection::Empty.is_strike());
    }

    #[test]
    fn test_chain_rule() {
        let mut words = WordManager::new();
        words.submit("dog");
        assert_eq!(
            words.submit("cat"),
            Outcome::Rejected(Rejection::ChainRuleViolation)
        );
        assert_eq!(words.submit("goat"), Outcome::Accepted);
        assert_eq!(words.submit("tiger"), Outcome::Accepted);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_chain_rule_ignores_case_and_keeps_casing() {
        let mut words = WordManager::new();
        words.submit("DoG");
        assert_eq!(words.submit("Gnu"), Outcome::Accepted);
        assert_eq!(words.history(), &["DoG".to_string(), "Gnu".to_string()]);
    }

    #[test]
    fn test_duplicate_of_recent() {
        let mut words = WordManager::new();
        words.submit("area");
        words.submit("apple");
        words.submit("emu");
        words.submit("ursa");
        // "area" chains from "ursa" but is still in the history.
        assert_eq!(
            words.submit("AREA"),
            Outcome::Rejected(Rejection::DuplicateOfRecent)
        );
    }

    #[test]
    fn test_previous_word_policy_allows_older_repeats() {
        let mut words = WordManager::with_policy(DuplicatePolicy::PreviousWord);
        words.submit("area");
        words.submit("apple");
        words.submit("emu");
        words.submit("ursa");
        assert_eq!(words.submit("area"), Outcome::Accepted);

        let mut words = WordManager::with_policy(DuplicatePolicy::PreviousWord);
        words.submit("aha");
        assert_eq!(
            words.submit("aha"),
            Outcome::Rejected(Rejection::DuplicateOfRecent)
        );
    }

    #[test]
    fn test_history_is_bounded_fifo() {
        let mut words = WordManager::new();
        let chain = [
            "ant", "tern", "newt", "tapir", "rat", "toad", "dingo", "owl",
        ];
        for word in chain {
            assert_eq!(words.submit(word), Outcome::Accepted, "{word}");
            assert!(words.len() <= MAX_RECENT_WORDS + 1);
        }
        assert_eq!(words.len(), MAX_RECENT_WORDS + 1);
        assert_eq!(words.history().first().map(String::as_str), Some("newt"));
        assert_eq!(words.last_word(), Some("owl"));
    }

    #[test]
    fn test_evicted_word_can_return() {
        let mut words = WordManager::new();
        for word in ["ant", "tern", "newt", "tapir", "rat", "tuna", "asp"] {
            assert_eq!(words.submit(word), Outcome::Accepted, "{word}");
        }
        // "ant" has dropped out of the history.
        assert_eq!(words.history().first().map(String::as_str), Some("tern"));
        assert_eq!(words.submit("pant"), Outcome::Accepted);
        assert_eq!(
            words.submit("tapir"),
            Outcome::Rejected(Rejection::DuplicateOfRecent)
        );
        assert_eq!(words.submit("tern"), Outcome::Accepted);
    }

    #[test]
    fn test_recent_words_display() {
        let mut words = WordManager::new();
        assert_eq!(words.recent_words_display(), "");
        words.submit("dog");
        words.submit("goat");
        assert_eq!(words.recent_words_display(), "dog - goat");
    }

    #[test]
    fn test_chains_helper() {
        assert!(chains("dog", "goat"));
        assert!(chains("doG", "goat"));
        assert!(!chains("dog", "cat"));
        assert!(!chains("", "cat"));
        assert!(!chains("dog", ""));
    }
}
