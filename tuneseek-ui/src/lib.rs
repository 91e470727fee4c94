//! tuneseek-ui - Pure view components for tuneseek
//!
//! Views take plain props and callbacks. The only piece of shared state is
//! the search store handle in `stores`, which pages hand down through context.

pub mod components;
pub mod stores;

pub use components::*;
pub use stores::*;
