//! Store handles for UI state

pub mod search;

pub use search::*;
