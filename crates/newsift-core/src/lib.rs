//! Shared types and configuration for the newsift pipeline.
//!
//! Defines the canonical [`Article`] record, the company registry loaded
//! from YAML, and the env-driven application configuration.

mod app_config;
mod article;
mod companies;
mod config;
mod error;

pub use app_config::AppConfig;
pub use article::{Article, Scores};
pub use companies::{Company, CompanyRegistry};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
