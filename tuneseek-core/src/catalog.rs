//! iTunes catalog client
//!
//! `search` never fails: transport errors, non-2xx statuses and unreadable
//! bodies all come back as a `CatalogResponse` with `ok == false`.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{CatalogTrack, Track};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Uniform result of one catalog call
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogResponse {
    pub ok: bool,
    /// HTTP status, `None` when no response arrived
    pub status: Option<u16>,
    /// Parsed body, `Null` when absent or unreadable
    pub data: Value,
}

impl CatalogResponse {
    pub fn success(status: u16, data: Value) -> Self {
        Self {
            ok: true,
            status: Some(status),
            data,
        }
    }

    pub fn failure(status: Option<u16>, data: Value) -> Self {
        Self {
            ok: false,
            status,
            data,
        }
    }

    /// Classify a failed response. `None` for successful ones.
    pub fn error(&self) -> Option<CatalogError> {
        if self.ok {
            return None;
        }
        let Some(status) = self.status else {
            return Some(CatalogError::Network);
        };
        if (200..300).contains(&status) {
            return Some(CatalogError::Decode { status });
        }
        let message = ["errorMessage", "message"]
            .iter()
            .filter_map(|key| self.data.get(key).and_then(Value::as_str))
            .map(str::trim)
            .find(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Catalog request failed with status {status}"));
        Some(CatalogError::Api { status, message })
    }
}

/// Something that can run a catalog term search
#[async_trait(?Send)]
pub trait CatalogClient {
    async fn search(&self, term: &str) -> CatalogResponse;
}

#[async_trait(?Send)]
impl<C: CatalogClient + ?Sized> CatalogClient for Rc<C> {
    async fn search(&self, term: &str) -> CatalogResponse {
        (**self).search(term).await
    }
}

/// `reqwest`-backed client for the public iTunes search endpoint
#[derive(Clone)]
pub struct ItunesCatalog {
    client: Client,
    config: CatalogConfig,
}

impl ItunesCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl CatalogClient for ItunesCatalog {
    async fn search(&self, term: &str) -> CatalogResponse {
        let url = self.config.search_url(term);
        info!("Catalog: GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Catalog request failed: {e}");
                return CatalogResponse::failure(None, Value::Null);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Catalog body read failed ({status}): {e}");
                return CatalogResponse::failure(Some(status.as_u16()), Value::Null);
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(data) if status.is_success() => CatalogResponse::success(status.as_u16(), data),
            Ok(data) => {
                warn!("Catalog returned {status}");
                CatalogResponse::failure(Some(status.as_u16()), data)
            }
            Err(e) => {
                warn!("Catalog body is not JSON ({status}): {e}");
                CatalogResponse::failure(Some(status.as_u16()), Value::Null)
            }
        }
    }
}

/// Extract tracks from a catalog payload, in payload order.
///
/// A missing `results` array yields no tracks. Rows that do not describe a
/// track are skipped, as are repeated ids (first occurrence wins).
pub fn parse_tracks(data: &Value) -> Vec<Track> {
    let Some(rows) = data.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(rows.len());
    let mut tracks = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match serde_json::from_value::<CatalogTrack>(row.clone()) {
            Ok(row) => {
                let track = Track::from(row);
                if seen.insert(track.id) {
                    tracks.push(track);
                } else {
                    debug!("Skipping duplicate track id {} at row {}", track.id, i);
                }
            }
            Err(e) => debug!("Skipping catalog row {}: {}", i, e),
        }
    }
    tracks
}
