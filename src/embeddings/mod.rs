// Sentence embeddings: trait-based abstraction over the embedding backend.
//
// The Embedder trait defines the interface. SentenceEmbedder implements it
// with all-MiniLM-L6-v2 running locally through ONNX Runtime; tests plug in
// small deterministic embedders instead.

pub mod download;
pub mod onnx;
pub mod traits;

pub use traits::Embedder;

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Scale a vector to unit length in place. Zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
