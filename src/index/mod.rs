pub mod occurrence_list;
pub mod inverted;
pub mod document;
