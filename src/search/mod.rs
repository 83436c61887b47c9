pub mod results;
pub mod executor;
pub mod cache;
