// Paper ingestion: locating PDFs, pulling their text, and cutting it into sentences.

pub mod pdf;
pub mod sentences;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// List the PDF files directly inside `dir`, sorted by file name.
///
/// The extension check is case-insensitive. Subdirectories are not searched.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read papers directory {}", dir.display()))?;

    let mut pdfs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            pdfs.push(path);
        }
    }

    pdfs.sort();
    Ok(pdfs)
}
