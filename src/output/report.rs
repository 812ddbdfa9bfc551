// Report artifacts: a plain-text report and a parallel JSON array.
//
// Both files are rewritten from scratch on every run. The JSON array holds
// one object per gap, in the same order as the text sections.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::gaps::ResearchGap;

const BANNER: &str = "AUTOMATICALLY DISCOVERED RESEARCH GAPS";
const RULE_WIDTH: usize = 60;

/// Render the plain-text report.
pub fn render_text_report(gaps: &[ResearchGap]) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for gap in gaps {
        out.push_str(&format!("GAP {}: {}\n", gap.gap_id, gap.title));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&gap.description);
        out.push_str("\n\n");
        out.push_str("Representative Evidence:\n");
        for sentence in &gap.evidence {
            out.push_str(&format!("- {sentence}\n"));
        }
        out.push_str("\n\n");
    }

    out
}

/// Render the JSON report (2-space indented array).
pub fn render_json_report(gaps: &[ResearchGap]) -> Result<String> {
    serde_json::to_string_pretty(gaps).context("Failed to serialize gaps to JSON")
}

/// Write both report artifacts, creating parent directories as needed.
///
/// Both reports are staged as `*.part` files and moved into place only once
/// both are written; a failed write leaves the previous reports untouched.
pub fn write_reports(gaps: &[ResearchGap], text_path: &Path, json_path: &Path) -> Result<()> {
    let json = render_json_report(gaps)?;

    let text_part = stage_file(text_path, &render_text_report(gaps))?;
    let json_part = match stage_file(json_path, &json) {
        Ok(part) => part,
        Err(e) => {
            let _ = std::fs::remove_file(&text_part);
            return Err(e);
        }
    };

    commit_file(&text_part, text_path)?;
    commit_file(&json_part, json_path)?;

    info!(
        gaps = gaps.len(),
        text = %text_path.display(),
        json = %json_path.display(),
        "Reports written"
    );
    Ok(())
}

/// Load a previously written JSON report.
pub fn read_json_report(path: &Path) -> Result<Vec<ResearchGap>> {
    if !path.exists() {
        anyhow::bail!(
            "Results file not found: {}\nAnalysis may have failed. Run `loopx analyze` first.",
            path.display()
        );
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Malformed gap report {}", path.display()))
}

fn stage_file(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let partial = part_path(path);
    std::fs::write(&partial, contents)
        .with_context(|| format!("Failed to write {}", partial.display()))?;
    Ok(partial)
}

/// `gap_results.txt` stages as `gap_results.txt.part`.
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

fn commit_file(partial: &Path, path: &Path) -> Result<()> {
    std::fs::rename(partial, path)
        .with_context(|| format!("Failed to move {} into place", path.display()))
}
