use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use log::warn;
use crate::core::types::DocumentKeywords;
use crate::index::occurrence_list::OccurrenceList;

/// Keyword -> occurrence list. Keywords and lists only ever grow.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    keywords: HashMap<String, OccurrenceList>,
    documents: Vec<String>,   // Merge order
    merged: HashSet<String>,
}

impl IndexStore {
    pub fn new() -> Self {
        IndexStore {
            keywords: HashMap::new(),
            documents: Vec::new(),
            merged: HashSet::new(),
        }
    }

    /// Merge one document's keywords into the index. Each occurrence lands at
    /// its ranked position in the keyword's list.
    ///
    /// A document already merged is skipped and `false` returned, so a list
    /// never holds two occurrences of the same document.
    pub fn merge_document(&mut self, doc_keywords: DocumentKeywords) -> bool {
        if self.merged.contains(&doc_keywords.document) {
            warn!("document '{}' already indexed, skipping", doc_keywords.document);
            return false;
        }

        for (keyword, occurrence) in doc_keywords.keywords {
            match self.keywords.entry(keyword) {
                Entry::Vacant(entry) => {
                    entry.insert(OccurrenceList::single(occurrence));
                }
                Entry::Occupied(mut entry) => {
                    entry.get_mut().insert(occurrence);
                }
            }
        }
        self.merged.insert(doc_keywords.document.clone());
        self.documents.push(doc_keywords.document);
        true
    }

    pub fn contains_document(&self, document: &str) -> bool {
        self.merged.contains(document)
    }

    pub fn lookup(&self, keyword: &str) -> Option<&OccurrenceList> {
        self.keywords.get(keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    /// Get an iterator over all keywords in the index
    pub fn keywords(&self) -> impl Iterator<Item = &String> {
        self.keywords.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OccurrenceList)> {
        self.keywords.iter()
    }

    /// Documents merged so far, in merge order
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn occurrence_count(&self) -> usize {
        self.keywords.values().map(OccurrenceList::len).sum()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
