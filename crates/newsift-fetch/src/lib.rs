//! News provider client for newsift.
//!
//! Fetches raw company-news records over a date window, split into
//! date-range chunks issued concurrently, with per-request retry and
//! partial-failure tolerance, then normalizes the provider shape into
//! the canonical [`newsift_core::Article`].

pub mod client;
pub mod error;
pub mod types;

mod chunk;
mod retry;

pub use client::NewsClient;
pub use error::FetchError;
pub use types::{normalize, ProviderArticle, ProviderDate};
