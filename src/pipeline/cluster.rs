// Stage 2: limitation sentences to research gaps.
//
// Two terminal paths, chosen by how much evidence survived filtering:
// - too little: skip embedding and clustering, report one conservative gap
//   covering whatever sentences exist (possibly none)
// - enough: embed, k-means, drop small clusters, one gap per survivor

use anyhow::Result;
use tracing::{info, warn};

use crate::clustering::{group_by_label, kmeans_labels};
use crate::config::PipelineConfig;
use crate::embeddings::Embedder;
use crate::gaps::{build_gap, ResearchGap};
use crate::limitations::load_sentences;

/// Which path produced a set of gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapPath {
    /// Too few sentences to cluster; a single gap covers them all
    LowData,
    /// Sentences were clustered into `k` groups; `kept` survived the size floor
    Clustered { k: usize, kept: usize },
}

/// Result of a clustering run.
#[derive(Debug, Clone)]
pub struct GapAnalysis {
    pub gaps: Vec<ResearchGap>,
    /// Number of valid limitation sentences that entered clustering
    pub limitation_count: usize,
    pub path: GapPath,
}

/// Filter raw candidate lines and discover gaps among the survivors.
pub async fn analyze(
    candidates: &[String],
    embedder: &dyn Embedder,
    config: &PipelineConfig,
) -> Result<GapAnalysis> {
    let sentences = load_sentences(candidates, config);
    info!(
        candidates = candidates.len(),
        limitations = sentences.len(),
        "Loaded limitation sentences"
    );
    discover_gaps(&sentences, embedder, config).await
}

/// Group valid limitation sentences into research gaps.
///
/// Errors from the embedder or the clusterer propagate unchanged; there is
/// no partial result.
pub async fn discover_gaps(
    sentences: &[String],
    embedder: &dyn Embedder,
    config: &PipelineConfig,
) -> Result<GapAnalysis> {
    if sentences.len() < config.low_data_threshold {
        warn!(
            limitations = sentences.len(),
            "Very limited limitation evidence; skipping clustering"
        );
        return Ok(GapAnalysis {
            gaps: vec![build_gap(1, sentences, config)],
            limitation_count: sentences.len(),
            path: GapPath::LowData,
        });
    }

    let embeddings = embedder.embed_batch(sentences).await?;
    if embeddings.len() != sentences.len() {
        anyhow::bail!(
            "Embedder returned {} vectors for {} sentences",
            embeddings.len(),
            sentences.len()
        );
    }

    let k = config.cluster_count(sentences.len());
    let labels = kmeans_labels(&embeddings, k, config.seed)?;

    let mut gaps = Vec::new();
    for (label, members) in group_by_label(sentences, &labels) {
        if members.len() < config.min_cluster_size {
            info!(label, size = members.len(), "Dropping undersized cluster");
            continue;
        }
        let gap_id = gaps.len() as u32 + 1;
        gaps.push(build_gap(gap_id, &members, config));
    }

    info!(
        limitations = sentences.len(),
        k,
        gaps = gaps.len(),
        "Research-gap analysis complete"
    );

    Ok(GapAnalysis {
        limitation_count: sentences.len(),
        path: GapPath::Clustered {
            k,
            kept: gaps.len(),
        },
        gaps,
    })
}
