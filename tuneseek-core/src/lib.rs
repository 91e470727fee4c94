//! tuneseek-core - search data flow for the tuneseek music search UI
//!
//! Holds everything that is not a view: the catalog client, the search store
//! and its reducer, memoized selectors, the debounced search orchestrator and
//! the per-card preview state machine. Runs natively and on wasm32.

pub mod catalog;
pub mod config;
pub mod details;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod preview;
pub mod selectors;
pub mod store;
pub mod timer;

pub use catalog::{parse_tracks, CatalogClient, CatalogResponse, ItunesCatalog};
pub use config::{CatalogConfig, ConfigError};
pub use details::{parse_route_id, resolve_details, DetailsLookup, DetailsView};
pub use error::{CatalogError, ErrorInfo};
pub use model::Track;
pub use orchestrator::{DebounceTicket, Debouncer, SearchOrchestrator};
pub use preview::{PreviewAudio, PreviewToggle};
pub use selectors::{SearchSelectors, Selector};
pub use store::{reduce, SearchAction, SearchDispatch, SearchState, SearchStore};
