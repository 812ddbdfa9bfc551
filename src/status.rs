// System status display: configured paths, model presence, existing artifacts.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::config::Config;
use crate::embeddings::download::embedding_files_present;

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    // Papers
    match crate::papers::list_pdfs(&config.papers_dir) {
        Ok(pdfs) => println!(
            "Papers: {} PDF(s) in {}",
            pdfs.len(),
            config.papers_dir.display()
        ),
        Err(_) => {
            println!("Papers: {} (missing)", config.papers_dir.display());
            println!("  Create it and copy your PDFs in, or set LOOPX_PAPERS_DIR");
        }
    }

    // Model
    if embedding_files_present(&config.model_dir) {
        println!("Embedding model: ready ({})", config.model_dir.display());
    } else {
        println!("Embedding model: not downloaded");
        println!("  Run `loopx download-model` to fetch all-MiniLM-L6-v2");
    }

    // Artifacts
    println!("Output directory: {}", config.output_dir.display());
    artifact_line("Limitations", &config.limitations_path())?;
    artifact_line("Text report", &config.text_report_path())?;
    artifact_line("JSON report", &config.json_report_path())?;

    Ok(())
}

fn artifact_line(label: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        println!("  {label}: not yet generated");
        return Ok(());
    }

    let metadata = std::fs::metadata(path)?;
    let modified = metadata
        .modified()
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    println!(
        "  {label}: {} ({}, updated {modified})",
        path.display(),
        format_bytes(metadata.len())
    );
    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
