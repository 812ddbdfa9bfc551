// Sentence embeddings with all-MiniLM-L6-v2 running through ONNX Runtime.
//
// Each sentence is tokenized, run through the BERT encoder, mean-pooled over
// real tokens (attention mask), then L2-normalised, which is exactly what the
// sentence-transformers pipeline for this model does.
//
// The model runs locally: no API calls, no rate limits.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Tokenizer, TruncationParams};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::traits::Embedder;
use super::{l2_normalize, EMBEDDING_DIM};

/// Longest token sequence fed to the encoder (the model's training limit).
const MAX_SEQ_LEN: usize = 256;

/// Texts per forward pass. Keeps padding waste and peak memory bounded.
const BATCH_SIZE: usize = 32;

/// Sentence embedder using a local ONNX model.
///
/// Arc<Mutex<Session>> because `Session::run` takes &mut self and the
/// session is moved into spawn_blocking.
pub struct SentenceEmbedder {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
}

impl SentenceEmbedder {
    /// Load the sentence embedding model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory.
    /// Run `loopx download-model` first if they don't exist.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            anyhow::bail!(
                "Embedding model not found: {}\nRun `loopx download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Embedding tokenizer not found: {}\nRun `loopx download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| {
                format!(
                    "Failed to load embedding model from {}",
                    model_path.display()
                )
            })?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load embedding tokenizer: {}", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Failed to configure tokenizer truncation: {}", e))?;

        debug!(
            "Loaded sentence embedding model from {}",
            model_dir.display()
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
        })
    }
}

#[async_trait]
impl Embedder for SentenceEmbedder {
    /// Embed texts in fixed-size chunks. CPU-bound work is offloaded to
    /// spawn_blocking to keep the async runtime responsive.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        let mut embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let session = Arc::clone(&self.session);
            let tokenizer = Arc::clone(&self.tokenizer);
            let chunk = chunk.to_vec();

            let vectors =
                tokio::task::spawn_blocking(move || embed_sync(&session, &tokenizer, &chunk))
                    .await
                    .context("spawn_blocking panicked")??;
            embeddings.extend(vectors);
        }

        Ok(embeddings)
    }
}

/// Embedder that defers loading the ONNX model until the first batch.
///
/// Runs that never reach clustering (too little evidence) never touch the
/// model files, so they work before `download-model` has been run.
pub struct LazyEmbedder {
    model_dir: PathBuf,
    inner: OnceCell<SentenceEmbedder>,
}

impl LazyEmbedder {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            inner: OnceCell::new(),
        }
    }

    /// Whether the underlying model has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.inner.initialized()
    }
}

#[async_trait]
impl Embedder for LazyEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let embedder = self
            .inner
            .get_or_try_init(|| async {
                info!(dir = %self.model_dir.display(), "Loading sentence embedding model");
                SentenceEmbedder::load(&self.model_dir)
            })
            .await?;

        embedder.embed_batch(texts).await
    }
}

/// Synchronous embedding: runs tokenization, inference, pooling, and
/// normalisation. Called from spawn_blocking.
fn embed_sync(
    session: &Arc<Mutex<Session>>,
    tokenizer: &Arc<Tokenizer>,
    texts: &[String],
) -> Result<Vec<Vec<f64>>> {
    let encodings: Vec<_> = texts
        .iter()
        .map(|t| {
            tokenizer
                .encode(t.as_str(), true)
                .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
        })
        .collect::<Result<Vec<_>>>()?;

    let batch_size = encodings.len();
    let max_len = encodings
        .iter()
        .map(|e| e.get_ids().len())
        .max()
        .unwrap_or(0);

    if max_len == 0 {
        return Ok(vec![vec![0.0; EMBEDDING_DIM]; batch_size]);
    }

    // BERT inputs, padded to max_len:
    //   input_ids: token IDs (pad with 0)
    //   attention_mask: 1 for real tokens, 0 for padding
    //   token_type_ids: all zeros for single-sentence input
    let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
    let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
    let mut token_type_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

    for enc in &encodings {
        let ids = enc.get_ids();
        let mask = enc.get_attention_mask();
        let pad_len = max_len - ids.len();

        input_ids_flat.extend(ids.iter().map(|&id| id as i64));
        input_ids_flat.extend(std::iter::repeat_n(0i64, pad_len));
        attention_mask_flat.extend(mask.iter().map(|&m| m as i64));
        attention_mask_flat.extend(std::iter::repeat_n(0i64, pad_len));
        token_type_ids_flat.extend(std::iter::repeat_n(0i64, max_len));
    }

    let shape = [batch_size as i64, max_len as i64];

    let input_ids_tensor =
        Tensor::from_array((shape, input_ids_flat)).context("Failed to create input_ids tensor")?;
    let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat.clone()))
        .context("Failed to create attention_mask tensor")?;
    let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids_flat))
        .context("Failed to create token_type_ids tensor")?;

    // last_hidden_state: [batch, seq_len, 384]
    let hidden_states = {
        let mut session = session
            .lock()
            .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

        let outputs = session
            .run(ort::inputs! {
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
                "token_type_ids" => token_type_ids_tensor
            })
            .context("Embedding ONNX inference failed")?;

        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .context("Failed to extract embedding output tensor")?;

        data.to_vec()
    };

    let embeddings: Vec<Vec<f64>> = (0..batch_size)
        .map(|i| {
            let mask = &attention_mask_flat[i * max_len..(i + 1) * max_len];
            let start = i * max_len * EMBEDDING_DIM;
            let mut pooled = mean_pool(
                &hidden_states[start..start + max_len * EMBEDDING_DIM],
                mask,
            );
            l2_normalize(&mut pooled);
            pooled
        })
        .collect();

    debug!(
        batch_size = batch_size,
        dim = EMBEDDING_DIM,
        "Computed sentence embeddings"
    );

    Ok(embeddings)
}

/// Average the token vectors of one sequence, counting only unmasked tokens.
///
/// `hidden` is `[seq_len * EMBEDDING_DIM]` row-major; `mask` is `[seq_len]`.
fn mean_pool(hidden: &[f32], mask: &[i64]) -> Vec<f64> {
    let mut sum = vec![0.0_f64; EMBEDDING_DIM];
    let mut mask_sum = 0.0_f64;

    for (j, &m) in mask.iter().enumerate() {
        if m > 0 {
            let weight = m as f64;
            mask_sum += weight;
            let token = &hidden[j * EMBEDDING_DIM..(j + 1) * EMBEDDING_DIM];
            for (acc, &val) in sum.iter_mut().zip(token) {
                *acc += val as f64 * weight;
            }
        }
    }

    if mask_sum > 0.0 {
        for val in &mut sum {
            *val /= mask_sum;
        }
    }

    sum
}
