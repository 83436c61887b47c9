use std::sync::Arc;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::alphabetic::AlphabeticFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::punctuation::TrailingPunctuationFilter;
use crate::analysis::filters::stopword::{NoiseWordFilter, NoiseWordSet};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::DEFAULT_PUNCTUATION;

/// Turns raw tokens into keywords: lower-case, strip trailing punctuation,
/// require letters only, drop noise words.
pub struct KeywordNormalizer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl KeywordNormalizer {
    pub fn new(noise_words: Arc<NoiseWordSet>) -> Self {
        KeywordNormalizer::with_punctuation(noise_words, DEFAULT_PUNCTUATION.to_vec())
    }

    pub fn with_punctuation(noise_words: Arc<NoiseWordSet>, punctuation: Vec<char>) -> Self {
        KeywordNormalizer {
            tokenizer: Box::new(WhitespaceTokenizer),
            filters: vec![
                Box::new(LowercaseFilter),
                Box::new(TrailingPunctuationFilter::new(punctuation)),
                Box::new(AlphabeticFilter),
                Box::new(NoiseWordFilter::new(noise_words)),
            ],
        }
    }

    /// Returns the keyword for `raw`, or `None` when the token is rejected
    pub fn normalize(&self, raw: &str) -> Option<String> {
        self.filters
            .iter()
            .try_fold(raw.to_string(), |text, filter| filter.filter(text))
    }

    /// Tokenizer and filter names in application order, for logging
    pub fn pipeline(&self) -> String {
        let filters: Vec<&str> = self.filters.iter().map(|f| f.name()).collect();
        format!("{} -> {}", self.tokenizer.name(), filters.join(" -> "))
    }

    /// Tokenize `text` and keep the keywords, in token order
    pub fn keywords(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter_map(|token| self.normalize(&token.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> KeywordNormalizer {
        KeywordNormalizer::new(Arc::new(["the", "in", "has"].into_iter().collect()))
    }

    #[test]
    fn test_normalize_strips_and_lowercases() {
        let n = normalizer();
        assert_eq!(n.normalize("Rain."), Some("rain".to_string()));
        assert_eq!(n.normalize("RAIN!?!"), Some("rain".to_string()));
        assert_eq!(n.normalize("spain"), Some("spain".to_string()));
    }

    #[test]
    fn test_normalize_rejections() {
        let n = normalizer();
        assert_eq!(n.normalize("..."), None);
        assert_eq!(n.normalize(""), None);
        assert_eq!(n.normalize("can't"), None);
        assert_eq!(n.normalize("?rain"), None);
        assert_eq!(n.normalize("r2d2"), None);
        assert_eq!(n.normalize("e.g."), None);
    }

    #[test]
    fn test_noise_words_checked_after_normalizing() {
        let n = normalizer();
        assert_eq!(n.normalize("the"), None);
        assert_eq!(n.normalize("The,"), None);
        assert_eq!(n.normalize("theme"), Some("theme".to_string()));
    }

    #[test]
    fn test_custom_punctuation() {
        let n = KeywordNormalizer::with_punctuation(Arc::new(NoiseWordSet::default()), vec!['-']);
        assert_eq!(n.normalize("rain--"), Some("rain".to_string()));
        assert_eq!(n.normalize("rain."), None);
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(
            normalizer().pipeline(),
            "whitespace -> lowercase -> trailing_punctuation -> alphabetic -> noise_words"
        );
    }

    #[test]
    fn test_keywords_of_text() {
        let n = normalizer();
        assert_eq!(n.keywords("The rain in Spain."), vec!["rain", "spain"]);
    }
}
