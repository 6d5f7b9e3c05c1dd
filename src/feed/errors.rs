//! Extraction failures and per-child skip reasons

use thiserror::Error;

use crate::search::SearchError;

/// Page-level extraction failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No posts container on the page; nothing can be extracted
    #[error("posts container not found: {0}")]
    ContainerNotFound(#[source] SearchError),
}

/// Why a child of the posts container produced no post
///
/// Skips are expected and silent; they are not errors of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Spacer or navigation element between posts
    #[error("padding element")]
    Padding,

    /// Promoted entry
    #[error("advertisement")]
    Advertisement,
}
