//! The newsift analysis pipeline: dedup, ranking, expansion, and the
//! orchestrator tying them to the fetch and inference services.
//!
//! Stage contracts live on the individual modules; [`pipeline`] wires them
//! into the cache-check / fetch / dedupe / rank / expand / cache-save
//! sequence one analysis request runs through.

pub mod cache;
pub mod dedup;
pub mod error;
pub mod expand;
pub mod pipeline;
pub mod rank;

mod cluster;
mod entities;
mod keywords;

#[cfg(test)]
mod testing;

pub use cache::{CacheEntry, ResultCache};
pub use dedup::dedupe;
pub use error::PipelineError;
pub use expand::{expand, ExpansionParams};
pub use pipeline::{NewsPipeline, PipelineConfig};
pub use rank::Ranker;
