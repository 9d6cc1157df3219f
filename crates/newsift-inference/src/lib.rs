//! Embedding and summarization collaborators for the newsift pipeline.
//!
//! Both capabilities are behind traits so the pipeline can be exercised
//! with deterministic stubs. The HTTP implementations target a TEI-style
//! embeddings service and a JSON summarization endpoint.

pub mod embedder;
pub mod error;
pub mod summarizer;

pub use embedder::{Embedder, TeiEmbedder};
pub use error::InferenceError;
pub use summarizer::{extractive_summary, LlmSummarizer, Summarizer};
