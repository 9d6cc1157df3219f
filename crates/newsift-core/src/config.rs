use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` at the binary entry point, not here —
/// this function only reads the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let provider_url = require("NEWSIFT_PROVIDER_URL")?;
    let provider_token = require("NEWSIFT_PROVIDER_TOKEN")?;
    let tei_url = require("NEWSIFT_TEI_URL")?;
    let summarizer_url = lookup("NEWSIFT_SUMMARIZER_URL").ok();

    let companies_path = PathBuf::from(or_default(
        "NEWSIFT_COMPANIES_PATH",
        "./config/companies.yaml",
    ));
    let log_level = or_default("NEWSIFT_LOG_LEVEL", "info");

    let decay_rate = parse_f64("NEWSIFT_DECAY_RATE", "0.1")?;
    let dedup_threshold = parse_f64("NEWSIFT_DEDUP_THRESHOLD", "0.76")?;
    validate_unit_range("NEWSIFT_DEDUP_THRESHOLD", dedup_threshold)?;

    let top_n = parse_usize("NEWSIFT_TOP_N", "5")?;
    let select_k = parse_usize("NEWSIFT_SELECT_K", "10")?;
    let similarity_threshold = parse_f64("NEWSIFT_SIMILARITY_THRESHOLD", "0.5")?;
    validate_unit_range("NEWSIFT_SIMILARITY_THRESHOLD", similarity_threshold)?;
    let max_expansion_extras = parse_usize("NEWSIFT_MAX_EXPANSION_EXTRAS", "25")?;
    let sentences_per_summary = parse_usize("NEWSIFT_SENTENCES_PER_SUMMARY", "3")?;

    let fetch_window_days = parse_i64("NEWSIFT_FETCH_WINDOW_DAYS", "30")?;
    let fetch_chunk_days = parse_i64("NEWSIFT_FETCH_CHUNK_DAYS", "7")?;
    let request_timeout_secs = parse_u64("NEWSIFT_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("NEWSIFT_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("NEWSIFT_RETRY_BACKOFF_BASE_MS", "1000")?;
    let summarizer_timeout_secs = parse_u64("NEWSIFT_SUMMARIZER_TIMEOUT_SECS", "20")?;

    if fetch_chunk_days < 1 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEWSIFT_FETCH_CHUNK_DAYS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        provider_url,
        provider_token,
        tei_url,
        summarizer_url,
        companies_path,
        log_level,
        decay_rate,
        dedup_threshold,
        top_n,
        select_k,
        similarity_threshold,
        max_expansion_extras,
        sentences_per_summary,
        fetch_window_days,
        fetch_chunk_days,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        summarizer_timeout_secs,
    })
}

fn validate_unit_range(var: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("{value} is outside [0, 1]"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
