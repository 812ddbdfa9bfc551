use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::limitations::vocabulary;

/// File name of the intermediate sentence list handed from extraction to clustering.
pub const LIMITATIONS_FILE: &str = "all_limitations.txt";
/// File name of the plain-text gap report.
pub const TEXT_REPORT_FILE: &str = "gap_results.txt";
/// File name of the JSON gap report.
pub const JSON_REPORT_FILE: &str = "gap_results.json";

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret; everything has a default. The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory scanned for `*.pdf` papers (LOOPX_PAPERS_DIR)
    pub papers_dir: PathBuf,
    /// Directory receiving the intermediate file and both reports (LOOPX_OUTPUT_DIR)
    pub output_dir: PathBuf,
    /// Directory containing the sentence embedding model files (LOOPX_MODEL_DIR)
    pub model_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("LOOPX_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::embeddings::download::default_model_dir());

        Ok(Self {
            papers_dir: env::var("LOOPX_PAPERS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/papers")),
            output_dir: env::var("LOOPX_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
            model_dir,
        })
    }

    pub fn limitations_path(&self) -> PathBuf {
        self.output_dir.join(LIMITATIONS_FILE)
    }

    pub fn text_report_path(&self) -> PathBuf {
        self.output_dir.join(TEXT_REPORT_FILE)
    }

    pub fn json_report_path(&self) -> PathBuf {
        self.output_dir.join(JSON_REPORT_FILE)
    }
}

/// Tunables and vocabularies for the limitation pipeline.
///
/// `Default` reproduces the stock behaviour. A JSON file may override any
/// subset of fields; anything it leaves out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum whitespace-separated words for a limitation sentence
    pub min_words: usize,
    /// Minimum ASCII letters for a limitation sentence
    pub min_alpha_chars: usize,
    /// Case-insensitive substrings that mark a sentence as limitation-related
    pub cue_words: Vec<String>,
    /// Ordered (keyword, title) pairs; the first keyword found wins
    pub concepts: Vec<(String, String)>,
    /// Upper bound on k for k-means
    pub max_clusters: usize,
    /// Clusters smaller than this are not reported
    pub min_cluster_size: usize,
    /// Maximum evidence sentences kept per gap
    pub max_evidence: usize,
    /// Below this many sentences clustering is skipped entirely
    pub low_data_threshold: usize,
    /// Seed for k-means++ initialisation
    pub seed: u64,
    /// Minimum words for a sentence to leave the extraction stage
    pub candidate_min_words: usize,
    /// Trailing words that mark a sentence as cut off mid-thought
    pub dangling_endings: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_words: 10,
            min_alpha_chars: 15,
            cue_words: vocabulary::default_cue_words(),
            concepts: vocabulary::default_concepts(),
            max_clusters: 6,
            min_cluster_size: 3,
            max_evidence: 5,
            low_data_threshold: 2,
            seed: 42,
            candidate_min_words: 6,
            dangling_endings: vocabulary::default_dangling_endings(),
        }
    }
}

impl PipelineConfig {
    /// Load a pipeline configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid pipeline config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the clustering stage cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_clusters < 2 {
            anyhow::bail!("max_clusters must be at least 2 (got {})", self.max_clusters);
        }
        if self.low_data_threshold < 2 {
            anyhow::bail!(
                "low_data_threshold must be at least 2 (got {})",
                self.low_data_threshold
            );
        }
        if self.cue_words.is_empty() {
            anyhow::bail!("cue_words must not be empty");
        }
        Ok(())
    }

    /// Number of clusters to request for `n` sentences.
    ///
    /// Always at least 2 and never more than `max_clusters`.
    pub fn cluster_count(&self, n: usize) -> usize {
        self.max_clusters.min((n / 2).max(2))
    }
}
