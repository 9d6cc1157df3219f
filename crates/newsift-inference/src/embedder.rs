//! Text-embedding capability and its TEI HTTP implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::InferenceError;

/// Maximum number of texts per /embed call.
const BATCH_SIZE: usize = 64;

/// Text-to-vector capability.
///
/// Implementations must be deterministic for identical input and return
/// exactly one fixed-dimensionality vector per input text, in input order.
/// Callers never invoke this with an empty batch.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Embed`] if the service fails or violates
    /// the one-vector-per-text contract.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError>;
}

/// TEI (Text Embeddings Inference) HTTP client.
pub struct TeiEmbedder {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

impl TeiEmbedder {
    #[must_use]
    pub fn new(tei_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/embed", tei_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Embedder for TeiEmbedder {
    /// Generate embeddings for a batch of texts.
    ///
    /// Texts are batched into groups of [`BATCH_SIZE`] (64) per request.
    /// Returns one embedding vector per input text, in the same order.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let inputs: Vec<&str> = chunk.iter().map(String::as_str).collect();
            let request = EmbedRequest { inputs: &inputs };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| InferenceError::Embed(format!("TEI request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(InferenceError::Embed(format!(
                    "TEI returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .await
                .map_err(|e| InferenceError::Embed(format!("TEI response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(InferenceError::Embed(format!(
                    "TEI returned {} embeddings for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        Ok(all_embeddings)
    }
}
