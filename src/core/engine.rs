use std::sync::Arc;
use log::{debug, info, warn};
use parking_lot::{RwLock, RwLockReadGuard};
use crate::analysis::analyzer::KeywordNormalizer;
use crate::analysis::filters::stopword::NoiseWordSet;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::DocumentKeywords;
use crate::index::document::index_document;
use crate::index::inverted::IndexStore;
use crate::index::occurrence_list::OccurrenceList;
use crate::search::cache::{CacheStats, QueryCache, QueryKey};
use crate::search::executor::QueryEngine;
use crate::storage::source::{read_manifest, DocumentSource};

/// Owns the noise words and the keyword index, builds the index from a
/// document source and answers two-keyword queries.
pub struct SearchEngine {
    config: Config,
    noise_words: Arc<NoiseWordSet>,
    normalizer: KeywordNormalizer,
    index: IndexStore,
    cache: QueryCache,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::from_valid_config(Config::default())
    }
}

impl SearchEngine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(SearchEngine::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        let noise_words = Arc::new(NoiseWordSet::default());
        let normalizer = KeywordNormalizer::with_punctuation(noise_words.clone(), config.punctuation.clone());
        let cache = QueryCache::new(config.query_cache_size);

        SearchEngine {
            config,
            noise_words,
            normalizer,
            index: IndexStore::new(),
            cache,
        }
    }

    pub fn with_noise_words(mut self, noise_words: NoiseWordSet) -> Self {
        self.set_noise_words(noise_words);
        self
    }

    pub fn set_noise_words(&mut self, noise_words: NoiseWordSet) {
        self.noise_words = Arc::new(noise_words);
        self.normalizer = KeywordNormalizer::with_punctuation(
            self.noise_words.clone(),
            self.config.punctuation.clone(),
        );
    }

    /// Load the noise word list `name`; returns how many words it holds
    pub fn load_noise_words<S: DocumentSource + ?Sized>(&mut self, source: &S, name: &str) -> Result<usize> {
        let text = source.read_text(name).inspect_err(|e| {
            warn!("noise word list unavailable: {}", e);
        })?;
        self.set_noise_words(NoiseWordSet::from_text(&text));
        debug!(
            "loaded {} noise words from '{}', analysis pipeline: {}",
            self.noise_words.len(),
            name,
            self.normalizer.pipeline()
        );
        Ok(self.noise_words.len())
    }

    /// Keyword for `word`, or `None` if it does not qualify
    pub fn get_keyword(&self, word: &str) -> Option<String> {
        self.normalizer.normalize(word)
    }

    /// Scan `document` and count its keywords. Nothing is merged here.
    pub fn load_keywords_from_document<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
        document: &str,
    ) -> Result<DocumentKeywords> {
        let text = source.read_text(document).inspect_err(|e| {
            warn!("document unavailable: {}", e);
        })?;
        Ok(self.keywords_from_text(document, &text))
    }

    /// Count the keywords of `text` as the contents of `document`
    pub fn keywords_from_text(&self, document: &str, text: &str) -> DocumentKeywords {
        let tokens = self.normalizer.tokenizer.tokenize(text);
        index_document(document, tokens.iter().map(|t| t.text.as_str()), &self.normalizer)
    }

    /// Returns false if the document was merged before; the index is left as is
    pub fn merge_keywords(&mut self, doc_keywords: DocumentKeywords) -> bool {
        debug!(
            "merging {} keywords from '{}'",
            doc_keywords.len(),
            doc_keywords.document
        );
        let merged = self.index.merge_document(doc_keywords);
        if merged {
            self.cache.clear();
        }
        merged
    }

    /// Load the noise words, then index every document of the manifest in
    /// order. Stops at the first unavailable document; documents merged
    /// before it stay in the index.
    pub fn make_index<S: DocumentSource + ?Sized>(
        &mut self,
        source: &S,
        manifest: &str,
        noise_words: &str,
    ) -> Result<()> {
        self.load_noise_words(source, noise_words)?;

        let documents = read_manifest(source, manifest).inspect_err(|e| {
            warn!("manifest unavailable: {}", e);
        })?;
        for document in &documents {
            let doc_keywords = self.load_keywords_from_document(source, document)?;
            self.merge_keywords(doc_keywords);
        }

        info!(
            "indexed {} documents, {} keywords",
            documents.len(),
            self.index.len()
        );
        Ok(())
    }

    /// Build from in-memory text: noise words, then `(name, text)` documents in order
    pub fn build_index<I, N, T>(&mut self, noise_words: &str, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        self.set_noise_words(NoiseWordSet::from_text(noise_words));

        let mut count = 0;
        for (name, text) in documents {
            let (name, text): (String, String) = (name.into(), text.into());
            let doc_keywords = self.keywords_from_text(&name, &text);
            self.merge_keywords(doc_keywords);
            count += 1;
        }

        info!("indexed {} documents, {} keywords", count, self.index.len());
        Ok(())
    }

    /// Top documents for "kw1 OR kw2", `None` if neither keyword is indexed
    pub fn search(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        let limit = self.config.result_limit;
        let key = QueryKey::new(kw1, kw2, limit);
        if let Some(results) = self.cache.get(&key) {
            return results;
        }

        let results = QueryEngine::with_limit(&self.index, limit).search(kw1, kw2);
        self.cache.put(key, results.clone());
        results
    }

    pub fn keyword(&self, keyword: &str) -> Option<&OccurrenceList> {
        self.index.lookup(keyword)
    }

    pub fn index(&self) -> &IndexStore {
        &self.index
    }

    pub fn noise_words(&self) -> &NoiseWordSet {
        &self.noise_words
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            keywords: self.index.len(),
            documents: self.index.document_count(),
            occurrences: self.index.occurrence_count(),
            noise_words: self.noise_words.len(),
        }
    }
}

/// Engine handle for multi-threaded use: merges take the write lock,
/// queries share the read lock.
#[derive(Clone)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedSearchEngine {
    pub fn new(engine: SearchEngine) -> Self {
        SharedSearchEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Scan under the read lock, merge under the write lock
    pub fn add_document<S: DocumentSource + ?Sized>(&self, source: &S, document: &str) -> Result<()> {
        let doc_keywords = self.inner.read().load_keywords_from_document(source, document)?;
        self.inner.write().merge_keywords(doc_keywords);
        Ok(())
    }

    pub fn merge_keywords(&self, doc_keywords: DocumentKeywords) -> bool {
        self.inner.write().merge_keywords(doc_keywords)
    }

    pub fn search(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        self.inner.read().search(kw1, kw2)
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SearchEngine> {
        self.inner.read()
    }
}
