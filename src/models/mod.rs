pub mod cache;
pub mod mappings;
pub mod stats;
