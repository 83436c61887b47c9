use log::trace;
use crate::core::config::DEFAULT_RESULT_LIMIT;
use crate::core::types::Occurrence;
use crate::index::inverted::IndexStore;
use crate::search::results::TopDocuments;

/// Merge two lists sorted by non-increasing frequency into one.
/// On equal frequencies the occurrence from `first` comes out first.
pub fn merge_ranked<'a>(first: &'a [Occurrence], second: &'a [Occurrence]) -> Vec<&'a Occurrence> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut i = 0;
    let mut j = 0;

    while i < first.len() || j < second.len() {
        let take_first = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) => a.frequency >= b.frequency,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_first {
            merged.push(&first[i]);
            i += 1;
        } else {
            merged.push(&second[j]);
            j += 1;
        }
    }

    merged
}

/// Answers "kw1 OR kw2" queries against a built index
pub struct QueryEngine<'a> {
    pub index: &'a IndexStore,
    pub limit: usize,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a IndexStore) -> Self {
        QueryEngine::with_limit(index, DEFAULT_RESULT_LIMIT)
    }

    pub fn with_limit(index: &'a IndexStore, limit: usize) -> Self {
        QueryEngine { index, limit }
    }

    /// Documents containing either keyword, highest frequency first, at most
    /// `limit` of them and each listed once. `None` means no match at all.
    ///
    /// Keywords are looked up as given; pass them lower-cased.
    pub fn search(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        let first = self.index.lookup(kw1).map(|list| list.as_slice()).unwrap_or(&[]);
        let second = self.index.lookup(kw2).map(|list| list.as_slice()).unwrap_or(&[]);

        if first.is_empty() && second.is_empty() {
            trace!("no occurrences for '{}' or '{}'", kw1, kw2);
            return None;
        }

        let mut collector = TopDocuments::new(self.limit);
        for occurrence in merge_ranked(first, second) {
            if collector.is_full() {
                break;
            }
            collector.collect(&occurrence.document);
        }

        collector.into_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentKeywords;

    fn occs(pairs: &[(&str, u32)]) -> Vec<Occurrence> {
        pairs
            .iter()
            .map(|(doc, freq)| Occurrence::with_frequency(*doc, *freq))
            .collect()
    }

    fn add(index: &mut IndexStore, document: &str, words: &[(&str, u32)]) {
        let mut kws = DocumentKeywords::new(document);
        for (word, count) in words {
            for _ in 0..*count {
                kws.record(word.to_string());
            }
        }
        index.merge_document(kws);
    }

    #[test]
    fn test_merge_ties_favor_first() {
        let first = occs(&[("a", 3), ("b", 1)]);
        let second = occs(&[("c", 3), ("d", 2)]);

        let merged: Vec<&str> = merge_ranked(&first, &second)
            .into_iter()
            .map(|occ| occ.document.as_str())
            .collect();
        assert_eq!(merged, vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_merge_with_empty_side() {
        let first = occs(&[("a", 3), ("b", 1)]);
        assert_eq!(merge_ranked(&first, &[]).len(), 2);
        assert_eq!(merge_ranked(&[], &first).len(), 2);
        assert!(merge_ranked(&[], &[]).is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let mut index = IndexStore::new();
        add(&mut index, "doc1", &[("rain", 1)]);

        let engine = QueryEngine::new(&index);
        assert_eq!(engine.search("zzz", "qqq"), None);
    }

    #[test]
    fn test_search_one_keyword_missing() {
        let mut index = IndexStore::new();
        add(&mut index, "doc1", &[("rain", 1)]);

        let engine = QueryEngine::new(&index);
        assert_eq!(engine.search("zzz", "rain"), Some(vec!["doc1".to_string()]));
    }

    #[test]
    fn test_search_dedups_documents() {
        let mut index = IndexStore::new();
        add(&mut index, "doc1", &[("rain", 3), ("spain", 2)]);
        add(&mut index, "doc2", &[("spain", 5)]);

        let engine = QueryEngine::new(&index);
        assert_eq!(
            engine.search("rain", "spain"),
            Some(vec!["doc2".to_string(), "doc1".to_string()])
        );
    }

    #[test]
    fn test_search_bounded_by_limit() {
        let mut index = IndexStore::new();
        for i in 0..8 {
            add(&mut index, &format!("doc{}", i), &[("rain", i + 1)]);
        }

        let results = QueryEngine::new(&index).search("rain", "rain").unwrap();
        assert_eq!(results, vec!["doc7", "doc6", "doc5", "doc4", "doc3"]);

        let results = QueryEngine::with_limit(&index, 2).search("rain", "spain").unwrap();
        assert_eq!(results, vec!["doc7", "doc6"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let mut index = IndexStore::new();
        add(&mut index, "doc1", &[("rain", 1)]);

        assert_eq!(QueryEngine::new(&index).search("Rain", "RAIN"), None);
    }
}
