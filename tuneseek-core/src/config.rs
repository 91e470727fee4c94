//! Catalog and search configuration
//!
//! Defaults target the public iTunes search API. A YAML file and `TUNESEEK_*`
//! environment variables can override them; env wins over the file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_RESULT_LIMIT: u32 = 20;

/// The catalog caps `limit` at 200
const MAX_RESULT_LIMIT: u32 = 200;
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the catalog client and the search orchestrator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog origin, without a trailing slash
    pub base_url: String,
    /// Catalog entity filter
    pub entity: String,
    /// Maximum number of results per search
    pub limit: u32,
    /// Quiet period before typed input becomes a search
    pub debounce_ms: u64,
    /// Edge length used when rescaling artwork for the details page
    pub artwork_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            entity: "song".to_string(),
            limit: DEFAULT_RESULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            artwork_size: 400,
        }
    }
}

impl CatalogConfig {
    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        info!("Loaded catalog config from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// Defaults overridden by `TUNESEEK_*` variables.
    ///
    /// On wasm32 there is no process environment, so this is `Default`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    /// Apply `TUNESEEK_*` overrides on top of `self`.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup("TUNESEEK_CATALOG_URL") {
            self.base_url = url;
        }
        if let Some(entity) = lookup("TUNESEEK_ENTITY") {
            self.entity = entity;
        }
        if let Some(limit) = lookup("TUNESEEK_RESULT_LIMIT") {
            self.limit = parse_number("TUNESEEK_RESULT_LIMIT", &limit)?;
        }
        if let Some(ms) = lookup("TUNESEEK_DEBOUNCE_MS") {
            self.debounce_ms = parse_number("TUNESEEK_DEBOUNCE_MS", &ms)?;
        }
        self.validate()
    }

    /// Normalize and check the settings; call after editing fields by hand.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".into()));
        }
        self.base_url = trimmed.to_string();
        if self.limit == 0 || self.limit > MAX_RESULT_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "limit must be between 1 and {MAX_RESULT_LIMIT}, got {}",
                self.limit
            )));
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::Invalid(format!(
                "debounce_ms must be at most {MAX_DEBOUNCE_MS}, got {}",
                self.debounce_ms
            )));
        }
        if self.debounce_ms == 0 {
            warn!("debounce_ms is 0, every keystroke will hit the catalog");
        }
        Ok(self)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Full search URL for `term`, URL-encoding the term.
    pub fn search_url(&self, term: &str) -> String {
        format!(
            "{}/search?term={}&entity={}&limit={}",
            self.base_url,
            urlencoding::encode(term),
            urlencoding::encode(&self.entity),
            self.limit
        )
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_search_url_encodes_term() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.search_url("AC/DC & friends"),
            "https://itunes.apple.com/search?term=AC%2FDC%20%26%20friends&entity=song&limit=20"
        );
    }

    #[test]
    fn test_yaml_keeps_defaults_for_missing_keys() {
        let config = CatalogConfig::from_yaml_str("limit: 5\nbase_url: http://localhost:9000/\n")
            .unwrap();
        assert_eq!(config.limit, 5);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.entity, "song");
    }

    #[test]
    fn test_yaml_rejects_out_of_range_limit() {
        let err = CatalogConfig::from_yaml_str("limit: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = CatalogConfig::from_yaml_str("limit: 500").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_yaml_rejects_overlong_debounce() {
        let err = CatalogConfig::from_yaml_str("debounce_ms: 5000000000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let config = CatalogConfig::from_yaml_str("debounce_ms: 10000").unwrap();
        assert_eq!(config.debounce(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TUNESEEK_CATALOG_URL", "http://127.0.0.1:8080"),
            ("TUNESEEK_DEBOUNCE_MS", "50"),
        ]);
        let config = CatalogConfig::from_yaml_str("debounce_ms: 1000")
            .unwrap()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.debounce(), Duration::from_millis(50));
    }

    #[test]
    fn test_non_numeric_override_is_rejected() {
        let err = CatalogConfig::default()
            .with_overrides(|key| (key == "TUNESEEK_RESULT_LIMIT").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("TUNESEEK_RESULT_LIMIT"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuneseek.yaml");
        std::fs::write(&path, "entity: musicVideo\n").unwrap();
        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.entity, "musicVideo");
    }
}
