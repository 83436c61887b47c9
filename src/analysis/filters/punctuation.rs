use crate::analysis::filter::TokenFilter;
use crate::core::config::DEFAULT_PUNCTUATION;

/// Strips trailing punctuation. Leading and interior characters are left alone.
pub struct TrailingPunctuationFilter {
    pub punctuation: Vec<char>,
}

impl TrailingPunctuationFilter {
    pub fn new(punctuation: Vec<char>) -> Self {
        TrailingPunctuationFilter { punctuation }
    }
}

impl Default for TrailingPunctuationFilter {
    fn default() -> Self {
        TrailingPunctuationFilter::new(DEFAULT_PUNCTUATION.to_vec())
    }
}

impl TokenFilter for TrailingPunctuationFilter {
    fn filter(&self, mut text: String) -> Option<String> {
        let stripped_len = text.trim_end_matches(self.punctuation.as_slice()).len();
        text.truncate(stripped_len);
        Some(text)
    }

    fn name(&self) -> &str {
        "trailing_punctuation"
    }
}
