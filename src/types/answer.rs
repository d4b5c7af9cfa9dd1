//! Structured answer types

use serde::{Deserialize, Serialize};

/// A structured answer to one question
///
/// Produced per question and never mutated after creation. All string fields
/// are always present (possibly empty); `page` is `-1` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredAnswer {
    /// The answer in clear language
    pub answer: String,
    /// The most relevant clause, quoted from the document
    pub clause: String,
    /// Section the clause belongs to (may be inferred by the model)
    pub section: String,
    /// Page number, -1 if unknown
    pub page: i64,
    /// Brief rationale for why this clause was chosen
    pub rationale: String,
}

impl StructuredAnswer {
    pub const SENTINEL_ANSWER: &'static str = "Sorry, I couldn't extract an answer.";
    pub const SENTINEL_RATIONALE: &'static str = "Failed to parse the model output.";

    /// The fixed fallback answer used when a question degrades.
    ///
    /// One malformed model response (or one unanswerable question) must never
    /// fail an entire batch, so the orchestrator substitutes this record for
    /// the affected question only.
    pub fn sentinel() -> Self {
        Self {
            answer: Self::SENTINEL_ANSWER.to_string(),
            clause: String::new(),
            section: String::new(),
            page: -1,
            rationale: Self::SENTINEL_RATIONALE.to_string(),
        }
    }
}

/// Ordered answers, one per input question in the same order
pub type AnswerBatch = Vec<StructuredAnswer>;

/// Wire response for the run endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    pub answers: AnswerBatch,
}
