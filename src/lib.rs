pub mod core;
pub mod storage;
pub mod analysis;
pub mod index;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                          KWINDEX DATA FLOW                               │
└──────────────────────────────────────────────────────────────────────────┘

  storage::source::DocumentSource           (noise words, manifest, documents)
              │ raw text
              ▼
  analysis::tokenizer::WhitespaceTokenizer  "The"  "rain"  "in"  "Spain."
              │ Token
              ▼
  analysis::analyzer::KeywordNormalizer
      LowercaseFilter → TrailingPunctuationFilter → AlphabeticFilter → NoiseWordFilter
              │ keyword
              ▼
  core::types::DocumentKeywords             keyword → Occurrence(doc, freq), one document
              │ merge_document
              ▼
  index::inverted::IndexStore               keyword → OccurrenceList (freq desc)
              │                             insert_last_occurrence = binary search
              ▼
  search::executor::QueryEngine             merge two lists, ties → kw1, ≤ 5 distinct docs
              │
              ▼
  core::engine::SearchEngine                facade + search::cache::QueryCache
  core::engine::SharedSearchEngine          Arc<RwLock<SearchEngine>>: one writer, many readers
*/
