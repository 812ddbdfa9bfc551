// Colored terminal output for discovered research gaps.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here after the reports have been written.

use colored::Colorize;

use crate::gaps::ResearchGap;
use crate::pipeline::{GapAnalysis, GapPath};

/// Longest evidence line shown in the terminal; the reports keep full text.
const EVIDENCE_PREVIEW_CHARS: usize = 220;

/// Display the discovered gaps.
pub fn display_gaps(gaps: &[ResearchGap]) {
    if gaps.is_empty() {
        println!(
            "No research gaps survived clustering. Try adding more papers \
             or lowering --min-cluster-size."
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== Discovered Research Gaps ({}) ===", gaps.len()).bold()
    );

    for gap in gaps {
        println!();
        println!(
            "  {} {}  {}",
            format!("Gap {}:", gap.gap_id).bold(),
            gap.title.bright_cyan().bold(),
            format!("[{} mentions]", gap.frequency).dimmed(),
        );
        println!("  {}", "-".repeat(60).dimmed());
        println!("  {}", gap.description.replace("**", ""));

        if !gap.evidence.is_empty() {
            println!("\n  {}", "Supporting evidence:".underline());
            for sentence in &gap.evidence {
                let preview = super::truncate_chars(sentence, EVIDENCE_PREVIEW_CHARS);
                println!("    - {}", preview.dimmed());
            }
        }
    }
    println!();
}

/// One-line summary of how the analysis ran.
pub fn display_summary(analysis: &GapAnalysis) {
    match analysis.path {
        GapPath::LowData => {
            println!(
                "{} Very limited limitation evidence ({} sentence(s)); \
                 generated a conservative single-gap report.",
                "Warning:".yellow(),
                analysis.limitation_count
            );
        }
        GapPath::Clustered { k, kept } => {
            println!(
                "Clustered {} limitation sentences into {} groups; {} reported as gaps.",
                analysis.limitation_count, k, kept
            );
        }
    }
}
