// Stage 1: PDFs to candidate sentences.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::papers::{self, pdf, sentences};

/// Extract candidate sentences from every PDF in `papers_dir`.
///
/// Papers are processed in file-name order, so the output order is stable.
/// Any unreadable PDF aborts the whole run.
pub fn extract_papers(papers_dir: &Path, config: &PipelineConfig) -> Result<Vec<String>> {
    let pdfs = papers::list_pdfs(papers_dir)?;
    if pdfs.is_empty() {
        warn!(dir = %papers_dir.display(), "No PDF files found");
        return Ok(Vec::new());
    }

    let pb = ProgressBar::new(pdfs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .context("invalid progress template")?
            .progress_chars("=> "),
    );

    let mut all_sentences = Vec::new();
    for path in &pdfs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(name.clone());

        let text = pdf::extract_text(path)?;
        let found = sentences::candidate_sentences(&text, config);
        info!(paper = %name, sentences = found.len(), "Processed paper");

        all_sentences.extend(found);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        papers = pdfs.len(),
        sentences = all_sentences.len(),
        "Extraction complete"
    );
    Ok(all_sentences)
}

/// Write sentences one per line, replacing any previous file.
pub fn write_limitations(path: &Path, sentences: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    for sentence in sentences {
        // Sentences are single-line by construction; guard the format anyway
        let line = sentence.replace(['\r', '\n'], " ");
        writeln!(writer, "{line}").with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read the intermediate sentence file back, one entry per line.
pub fn read_limitations(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read limitations file {}", path.display()))?;
    Ok(raw.lines().map(str::to_string).collect())
}
