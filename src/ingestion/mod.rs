//! Document text extraction

pub mod extract;

pub use extract::extract_chunks;
