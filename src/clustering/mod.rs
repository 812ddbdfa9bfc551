// Clustering: k-means over sentence embeddings, plus label grouping.

use anyhow::{Context, Result};
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use ndarray::{Array1, Array2};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing::debug;

const MAX_ITERATIONS: u64 = 300;
const TOLERANCE: f64 = 1e-4;

/// Cluster `embeddings` into `k` groups with k-means++ seeded k-means.
///
/// Returns one label in `0..k` per embedding. The same seed always yields
/// the same labels for the same input.
pub fn kmeans_labels(embeddings: &[Vec<f64>], k: usize, seed: u64) -> Result<Vec<usize>> {
    if k == 0 {
        anyhow::bail!("k-means needs at least one cluster");
    }
    if embeddings.len() < k {
        anyhow::bail!(
            "k-means needs at least as many points as clusters ({} points, k = {})",
            embeddings.len(),
            k
        );
    }
    let dim = embeddings[0].len();
    if embeddings.iter().any(|e| e.len() != dim) {
        anyhow::bail!("k-means input vectors have inconsistent dimensions");
    }

    let flat: Vec<f64> = embeddings.iter().flatten().copied().collect();
    let records = Array2::from_shape_vec((embeddings.len(), dim), flat)
        .context("Failed to shape embeddings for clustering")?;
    let dataset = DatasetBase::from(records);

    let rng = Xoshiro256Plus::seed_from_u64(seed);
    let model = KMeans::params_with_rng(k, rng)
        .max_n_iterations(MAX_ITERATIONS)
        .tolerance(TOLERANCE)
        .fit(&dataset)
        .map_err(|e| anyhow::anyhow!("k-means failed: {e}"))?;

    let labels: Array1<usize> = model.predict(dataset.records());
    debug!(points = embeddings.len(), k, "k-means fitted");
    Ok(labels.to_vec())
}

/// Group items by their cluster label.
///
/// Groups come out in label discovery order (the order in which each label
/// first appears), and items keep their input order within a group. Every
/// item lands in exactly one group.
pub fn group_by_label<T: Clone>(items: &[T], labels: &[usize]) -> Vec<(usize, Vec<T>)> {
    let mut groups: Vec<(usize, Vec<T>)> = Vec::new();

    for (item, &label) in items.iter().zip(labels) {
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((label, vec![item.clone()])),
        }
    }

    groups
}
