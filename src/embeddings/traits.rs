// Embedder trait: the swap-ready abstraction between text and vectors.

use anyhow::Result;
use async_trait::async_trait;

/// Maps sentences to fixed-length vectors. Output order matches input order,
/// and every vector produced by one embedder has the same length.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>>;
}
