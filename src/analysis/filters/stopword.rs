use std::collections::HashSet;
use std::sync::Arc;
use crate::analysis::filter::TokenFilter;

/// Words excluded from indexing. Loaded verbatim and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseWordSet {
    words: HashSet<String>,
}

impl NoiseWordSet {
    pub fn new(words: Vec<String>) -> Self {
        NoiseWordSet {
            words: words.into_iter().collect(),
        }
    }

    /// Every whitespace-delimited token of `text` is taken as a noise word as is
    pub fn from_text(text: &str) -> Self {
        NoiseWordSet {
            words: text.split_whitespace().map(String::from).collect(),
        }
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

impl<S: Into<String>> FromIterator<S> for NoiseWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NoiseWordSet {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct NoiseWordFilter {
    pub noise_words: Arc<NoiseWordSet>,
}

impl NoiseWordFilter {
    pub fn new(noise_words: Arc<NoiseWordSet>) -> Self {
        NoiseWordFilter { noise_words }
    }
}

impl TokenFilter for NoiseWordFilter {
    fn filter(&self, text: String) -> Option<String> {
        if self.noise_words.contains(&text) {
            None
        } else {
            Some(text)
        }
    }

    fn name(&self) -> &str {
        "noise_words"
    }
}
