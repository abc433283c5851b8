use crate::config::DEFAULT_STOP_WORDS;
use std::collections::HashSet;

/// Immutable set of words that never enter the frequency table
///
/// Words are stored lowercase; lookups expect lowercase tokens, which is what
/// the tokenizer produces.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Builds a set from any list of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The built-in English list
    pub fn english() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
