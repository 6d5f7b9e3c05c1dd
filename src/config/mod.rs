//! Configuration module for feed requests
//!
//! This module provides the `FeedOptions` struct and its validating builder
//! for describing which listing page is wanted and how links to it and to the
//! following page are formed.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::FeedOptionsBuilder;
pub use types::{ConfigError, FeedOptions, SortMethod};
