use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;

/// How many times a keyword appears in one document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    /// First sighting of a keyword in `document`
    pub fn new(document: impl Into<String>) -> Self {
        Occurrence {
            document: document.into(),
            frequency: 1,
        }
    }

    pub fn with_frequency(document: impl Into<String>, frequency: u32) -> Self {
        Occurrence {
            document: document.into(),
            frequency,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Keyword occurrences of a single document, built before merging into the index.
/// Each keyword maps to exactly one Occurrence.
#[derive(Debug, Clone)]
pub struct DocumentKeywords {
    pub document: String,
    pub keywords: HashMap<String, Occurrence>,
}

impl DocumentKeywords {
    pub fn new(document: impl Into<String>) -> Self {
        DocumentKeywords {
            document: document.into(),
            keywords: HashMap::new(),
        }
    }

    /// Count one more appearance of `keyword` in this document
    pub fn record(&mut self, keyword: String) {
        match self.keywords.get_mut(&keyword) {
            Some(occurrence) => occurrence.frequency += 1,
            None => {
                let occurrence = Occurrence::new(self.document.clone());
                self.keywords.insert(keyword, occurrence);
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&Occurrence> {
        self.keywords.get(keyword)
    }

    pub fn frequency(&self, keyword: &str) -> u32 {
        self.keywords.get(keyword).map(|occ| occ.frequency).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_repeats() {
        let mut kws = DocumentKeywords::new("doc1.txt");
        kws.record("rain".to_string());
        kws.record("spain".to_string());
        kws.record("rain".to_string());

        assert_eq!(kws.len(), 2);
        assert_eq!(kws.frequency("rain"), 2);
        assert_eq!(kws.frequency("spain"), 1);
        assert_eq!(kws.frequency("plain"), 0);
        assert_eq!(kws.get("rain").unwrap().document, "doc1.txt");
    }

    #[test]
    fn test_occurrence_display() {
        let occ = Occurrence::with_frequency("doc1.txt", 3);
        assert_eq!(occ.to_string(), "(doc1.txt,3)");
    }
}
