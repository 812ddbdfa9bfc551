// PDF text extraction via the pdf-extract crate.
//
// Text comes out page by page; every page is followed by a newline so the
// last line of one page never fuses with the first line of the next.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Extract the full text of a PDF file.
pub fn extract_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read PDF {}", path.display()))?;
    let text = extract_text_from_bytes(&bytes)
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    if text.trim().is_empty() {
        warn!(path = %path.display(), "PDF produced no text (scanned or image-only?)");
    }

    Ok(text)
}

/// Extract text from in-memory PDF bytes, concatenating pages.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| anyhow::anyhow!("PDF extraction failed: {}", e))?;

    debug!(pages = pages.len(), "Extracted PDF pages");
    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}
