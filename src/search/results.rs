/// Collects up to `k` distinct documents in the order they are offered
#[derive(Debug, Clone)]
pub struct TopDocuments {
    pub documents: Vec<String>,
    pub k: usize,
    pub total_collected: usize,  // Occurrences offered, duplicates included
}

impl TopDocuments {
    pub fn new(k: usize) -> Self {
        TopDocuments {
            documents: Vec::with_capacity(k),
            k,
            total_collected: 0,
        }
    }

    /// Returns true if the document was added
    pub fn collect(&mut self, document: &str) -> bool {
        self.total_collected += 1;

        if self.is_full() || self.documents.iter().any(|d| d == document) {
            return false;
        }
        self.documents.push(document.to_string());
        true
    }

    pub fn is_full(&self) -> bool {
        self.documents.len() >= self.k
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// `None` when nothing was collected
    pub fn into_results(self) -> Option<Vec<String>> {
        if self.documents.is_empty() {
            None
        } else {
            Some(self.documents)
        }
    }
}
