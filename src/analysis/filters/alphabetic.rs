use crate::analysis::filter::TokenFilter;

/// Rejects empty tokens and tokens containing anything other than letters.
///
/// Uses the Unicode Alphabetic property, which is wider than the general
/// "Letter" categories: letter numbers such as 'Ⅻ' and some combining marks
/// (e.g. U+0345) pass. Plain letters, accented or not, behave the same either way.
pub struct AlphabeticFilter;

impl TokenFilter for AlphabeticFilter {
    fn filter(&self, text: String) -> Option<String> {
        if !text.is_empty() && text.chars().all(char::is_alphabetic) {
            Some(text)
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(text: &str) -> bool {
        AlphabeticFilter.filter(text.to_string()).is_some()
    }

    #[test]
    fn test_letters_accepted() {
        assert!(accepts("rain"));
        assert!(accepts("café"));
        assert!(accepts("straße"));
    }

    #[test]
    fn test_non_letters_rejected() {
        assert!(!accepts(""));
        assert!(!accepts("can't"));
        assert!(!accepts("r2d2"));
        assert!(!accepts("rain-fall"));
    }

    #[test]
    fn test_alphabetic_property_is_wider_than_letters() {
        // Letter number, Alphabetic but not a letter category
        assert!(accepts("Ⅻ"));
    }
}
