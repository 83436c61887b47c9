pub mod lowercase;
pub mod punctuation;
pub mod alphabetic;
pub mod stopword;
