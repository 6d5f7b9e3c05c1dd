//! Read-only accessors for `FeedOptions`

use super::types::{FeedOptions, SortMethod};

impl FeedOptions {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn subreddit(&self) -> Option<&str> {
        self.subreddit.as_deref()
    }

    #[must_use]
    pub fn sort(&self) -> SortMethod {
        self.sort
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }
}
