use crate::analysis::filter::TokenFilter;

pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, text: String) -> Option<String> {
        Some(text.to_lowercase())
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}
