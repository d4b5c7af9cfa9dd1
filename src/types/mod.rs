//! Domain types shared across the pipeline

pub mod answer;
pub mod chunk;

pub use answer::{AnswerBatch, RunResponse, StructuredAnswer};
pub use chunk::Chunk;
