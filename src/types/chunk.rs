//! Page-tagged document chunks

use serde::{Deserialize, Serialize};

/// A unit of extracted document text tagged with its originating page
///
/// The text carries a human-readable `Page N:` marker so page provenance
/// survives later stages as plain text; the vector index only stores opaque
/// text/vector pairs. Chunks are immutable once created and are owned by the
/// `DocumentIndex` for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Page text, prefixed with the page marker
    pub text: String,
}

impl Chunk {
    /// Build a chunk from a page's raw extracted text.
    ///
    /// Lines are trimmed and empty lines dropped; returns `None` for pages
    /// whose text is empty or whitespace-only. Skipped pages still consume
    /// their slot in the overall page numbering.
    pub fn from_page(page_number: u32, raw: &str) -> Option<Self> {
        let cleaned = raw
            .replace('\0', "")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if cleaned.is_empty() {
            return None;
        }

        Some(Self {
            page_number,
            text: format!("Page {}: {}", page_number, cleaned),
        })
    }
}
