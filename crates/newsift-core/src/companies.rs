//! Company registry loaded from a YAML file.
//!
//! The registry is the full set of companies the pipeline will answer for.
//! External lookups are case-insensitive and resolve to the canonical
//! stored casing before anything else (cache keys, fetch symbols, relevance
//! scoring) sees the name.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Canonical display name; also the cache key.
    pub name: String,
    /// Provider ticker symbol used for news fetches.
    pub symbol: String,
    /// Known name variations (legal names, product brands, abbreviations)
    /// counted by the relevance scorer. The canonical name is always
    /// treated as a variation whether listed or not.
    #[serde(default)]
    pub variations: Vec<String>,
}

impl Company {
    /// All mention strings for this company, lowercased: the canonical
    /// name plus every configured variation.
    #[must_use]
    pub fn mention_terms(&self) -> Vec<String> {
        let mut terms = vec![self.name.to_lowercase()];
        for v in &self.variations {
            let lower = v.to_lowercase();
            if !terms.contains(&lower) {
                terms.push(lower);
            }
        }
        terms
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CompaniesFile {
    companies: Vec<Company>,
}

/// Validated, in-memory company registry.
#[derive(Debug, Clone)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    /// Load and validate the registry from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation (empty names, duplicate names or symbols).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::CompaniesFileIo {
                path: path.display().to_string(),
                source: e,
            })?;
        let file: CompaniesFile = serde_yaml::from_str(&content)?;
        Self::from_companies(file.companies)
    }

    /// Build a registry from already-parsed entries, applying the same
    /// validation as [`CompanyRegistry::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` on empty or duplicate entries.
    pub fn from_companies(companies: Vec<Company>) -> Result<Self, ConfigError> {
        let mut seen_names = HashSet::new();
        let mut seen_symbols = HashSet::new();

        for company in &companies {
            if company.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "company name must be non-empty".to_string(),
                ));
            }
            if company.symbol.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "company '{}' has an empty symbol",
                    company.name
                )));
            }
            if !seen_names.insert(company.name.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate company name: '{}'",
                    company.name
                )));
            }
            if !seen_symbols.insert(company.symbol.to_uppercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate company symbol: '{}'",
                    company.symbol
                )));
            }
        }

        Ok(Self { companies })
    }

    /// Resolve a user-supplied company name to its canonical entry.
    ///
    /// Matching is case-insensitive against the canonical name only;
    /// variations are scoring vocabulary, not lookup keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownCompany` if no entry matches.
    pub fn resolve(&self, input: &str) -> Result<&Company, ConfigError> {
        let lower = input.trim().to_lowercase();
        self.companies
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
            .ok_or_else(|| ConfigError::UnknownCompany(input.to_string()))
    }

    /// Canonical names of every registered company.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.companies.iter().map(|c| c.name.clone()).collect()
    }

    /// Lowercased mention terms for every company other than `target`.
    ///
    /// `target` is matched case-insensitively against canonical names.
    #[must_use]
    pub fn other_mention_terms(&self, target: &str) -> Vec<String> {
        let target_lower = target.to_lowercase();
        self.companies
            .iter()
            .filter(|c| c.name.to_lowercase() != target_lower)
            .flat_map(Company::mention_terms)
            .collect()
    }

    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }
}

#[cfg(test)]
#[path = "companies_test.rs"]
mod tests;
