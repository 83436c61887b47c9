use serde::{Serialize, Deserialize};

/// Index statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub keywords: usize,      // Distinct keywords
    pub documents: usize,     // Documents merged so far
    pub occurrences: usize,   // Sum of all occurrence list lengths
    pub noise_words: usize,
}
