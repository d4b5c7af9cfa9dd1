//! PDF text extraction into page-tagged chunks

use crate::error::{Error, Result};
use crate::types::Chunk;

/// Turn raw PDF bytes into an ordered sequence of page-tagged chunks.
///
/// Each page yields at most one chunk; pages whose extracted text is empty or
/// whitespace-only are skipped while still consuming their page number. Bytes
/// that cannot be parsed as a PDF fail with `Error::Extraction`. Zero chunks
/// is not an extraction error: the caller proceeds and retrieval over the
/// resulting empty index fails per question instead.
pub fn extract_chunks(data: &[u8]) -> Result<Vec<Chunk>> {
    // Validate the document structure before text extraction.
    let document = lopdf::Document::load_mem(data)
        .map_err(|e| Error::Extraction(format!("failed to load PDF: {}", e)))?;
    let page_count = document.get_pages().len();

    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| Error::Extraction(format!("failed to extract text: {}", e)))?;

    let chunks = chunks_from_pages(pages);
    tracing::debug!(
        pages = page_count,
        chunks = chunks.len(),
        "extracted document text"
    );

    Ok(chunks)
}

/// Page texts (in document order) to chunks, skipping empty pages.
pub fn chunks_from_pages<I>(pages: I) -> Vec<Chunk>
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .enumerate()
        .filter_map(|(i, text)| Chunk::from_page(i as u32 + 1, &text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // PDF-backed extraction is covered in tests/extraction.rs, which shares
    // the generated-PDF fixture with the other integration tests.

    #[test]
    fn garbage_bytes_fail_with_extraction_error() {
        let err = extract_chunks(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn empty_pages_are_skipped_but_numbering_is_kept() {
        let pages = vec![
            "First page.".to_string(),
            "   ".to_string(),
            "Third page.".to_string(),
        ];
        let chunks = chunks_from_pages(pages);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Page 1: First page.");
        assert_eq!(chunks[1].text, "Page 3: Third page.");
    }

    #[test]
    fn all_empty_pages_yield_zero_chunks() {
        let pages = vec![String::new(), "\n".to_string()];
        assert!(chunks_from_pages(pages).is_empty());
    }
}
