//! Core option types for feed requests
//!
//! `FeedOptions` describes which listing is requested (front page or a
//! subreddit, sort order, paging cursor) and where it lives. The same value
//! produces the outbound page URL and, with the base URL stripped, the
//! continuation link handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::DEFAULT_BASE_URL;

/// Errors raised while building or parsing feed options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Sort name outside the listing's known sort orders
    #[error("'{0}' is not a sort method")]
    UnknownSortMethod(String),

    /// Base URL that is neither empty nor an absolute http(s) URL
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Subreddit name that cannot be placed in a path segment
    #[error("invalid subreddit name '{0}'")]
    InvalidSubreddit(String),
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Whatever the site serves without a `sort` parameter
    #[default]
    Default,
    Hot,
    New,
    Rising,
    Controversial,
    Top,
    Gilded,
}

impl SortMethod {
    /// Every sort order that can be requested explicitly
    pub const EXPLICIT: [SortMethod; 6] = [
        SortMethod::Hot,
        SortMethod::New,
        SortMethod::Rising,
        SortMethod::Controversial,
        SortMethod::Top,
        SortMethod::Gilded,
    ];

    /// Value of the `sort` query parameter, `None` for `Default`
    #[must_use]
    pub fn as_query(self) -> Option<&'static str> {
        match self {
            SortMethod::Default => None,
            SortMethod::Hot => Some("hot"),
            SortMethod::New => Some("new"),
            SortMethod::Rising => Some("rising"),
            SortMethod::Controversial => Some("controversial"),
            SortMethod::Top => Some("top"),
            SortMethod::Gilded => Some("gilded"),
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query().unwrap_or("default"))
    }
}

impl FromStr for SortMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMethod::EXPLICIT
            .into_iter()
            .find(|method| method.as_query() == Some(s))
            .ok_or_else(|| ConfigError::UnknownSortMethod(s.to_string()))
    }
}

/// Options describing one feed page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedOptions {
    /// Scheme and host prepended to every generated link.
    ///
    /// Empty means "relative to whoever serves the feed", which is how
    /// continuation links are produced.
    pub(crate) base_url: String,

    /// Subreddit to list; `None` lists the front page
    pub(crate) subreddit: Option<String>,

    pub(crate) sort: SortMethod,

    /// Index of the first post to return (0, 25, 50, ...). Zero is omitted.
    pub(crate) count: u32,

    /// ID of the last post on the previous page. Takes precedence over
    /// `count` on the site side when both are given.
    pub(crate) after: Option<String>,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            subreddit: None,
            sort: SortMethod::Default,
            count: 0,
            after: None,
        }
    }
}
