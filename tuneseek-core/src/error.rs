use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a catalog search did not produce results
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport failure, no response at all
    #[error("Network error: unable to reach the catalog")]
    Network,
    /// Non-2xx response
    #[error("{message}")]
    Api { status: u16, message: String },
    /// 2xx response whose body could not be read
    #[error("The catalog returned an unreadable response (status {status})")]
    Decode { status: u16 },
}

impl CatalogError {
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Network => None,
            CatalogError::Api { status, .. } | CatalogError::Decode { status } => Some(*status),
        }
    }
}

/// User-displayable error carried by the search store
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub status: Option<u16>,
}

impl From<CatalogError> for ErrorInfo {
    fn from(err: CatalogError) -> Self {
        ErrorInfo {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => f.write_str(&self.message),
        }
    }
}
