use crate::analysis::analyzer::KeywordNormalizer;
use crate::core::types::DocumentKeywords;

/// Count the keywords among `tokens` for one document.
/// Rejected tokens are skipped; token order does not affect the counts.
pub fn index_document<I, S>(document: &str, tokens: I, normalizer: &KeywordNormalizer) -> DocumentKeywords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut doc_keywords = DocumentKeywords::new(document);
    for token in tokens {
        if let Some(keyword) = normalizer.normalize(token.as_ref()) {
            doc_keywords.record(keyword);
        }
    }
    doc_keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_index_document_counts_keywords() {
        let normalizer = KeywordNormalizer::new(Arc::new(["the", "in"].into_iter().collect()));
        let tokens = "The rain in Spain stays mainly in the plain. Rain, rain!".split_whitespace();

        let kws = index_document("doc1.txt", tokens, &normalizer);

        assert_eq!(kws.document, "doc1.txt");
        assert_eq!(kws.frequency("rain"), 3);
        assert_eq!(kws.frequency("spain"), 1);
        assert_eq!(kws.frequency("plain"), 1);
        assert_eq!(kws.frequency("the"), 0);
        assert_eq!(kws.len(), 5);
    }

    #[test]
    fn test_token_order_irrelevant() {
        let normalizer = KeywordNormalizer::new(Arc::new(Default::default()));
        let forward = index_document("d", ["a", "b", "a", "c"], &normalizer);
        let backward = index_document("d", ["c", "a", "b", "a"], &normalizer);
        assert_eq!(forward.keywords, backward.keywords);
    }
}
