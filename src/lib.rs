//! policy-rag: retrieval-augmented Q&A over a single uploaded document
//!
//! This crate answers natural-language questions against the content of one
//! uploaded PDF. The document is split into page-tagged chunks, each chunk is
//! embedded via an external embedding service, and the resulting vectors are
//! held in an in-memory flat index scoped to the request. Each question is
//! embedded, the nearest chunks are retrieved, and a generative model produces
//! a structured answer citing a clause, section, and page.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use types::{
    answer::{AnswerBatch, StructuredAnswer},
    chunk::Chunk,
};
