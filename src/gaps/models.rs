// The reported unit: one research gap per surviving cluster.

use serde::{Deserialize, Serialize};

/// A recurring unresolved issue backed by limitation sentences.
///
/// Serialises to the JSON report shape:
/// `{gap_id, title, description, frequency, evidence}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchGap {
    /// Sequential id, starting at 1, in report order
    pub gap_id: u32,
    pub title: String,
    pub description: String,
    /// Number of sentences in the underlying cluster (not capped)
    pub frequency: usize,
    /// Representative sentences, at most `max_evidence` of them
    pub evidence: Vec<String>,
}
