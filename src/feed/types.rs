//! Feed data structures
//!
//! Field names serialize in camelCase to match the JSON shape consumers of
//! the feed already expect (`postLink`, `commentCount`, `isNSFW`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::classify::classify;
use crate::config::FeedOptions;

/// Content kind of a post, inferred from its canonical link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedPostType {
    Text,
    #[default]
    Link,
    Image,
    Video,
    Gallery,
}

impl FeedPostType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FeedPostType::Text => "text",
            FeedPostType::Link => "link",
            FeedPostType::Image => "image",
            FeedPostType::Video => "video",
            FeedPostType::Gallery => "gallery",
        }
    }
}

impl fmt::Display for FeedPostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' does not belong to FeedPostType values")]
pub struct UnknownPostType(pub String);

impl FromStr for FeedPostType {
    type Err = UnknownPostType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FeedPostType::Text),
            "link" => Ok(FeedPostType::Link),
            "image" => Ok(FeedPostType::Image),
            "video" => Ok(FeedPostType::Video),
            "gallery" => Ok(FeedPostType::Gallery),
            other => Err(UnknownPostType(other.to_string())),
        }
    }
}

/// One entry of a listing page
///
/// Built once per extraction and never mutated afterwards. String fields are
/// empty when the markup did not provide them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    /// Fullname of the post (`t3_...`)
    pub id: String,

    #[serde(rename = "type")]
    pub kind: FeedPostType,

    pub title: String,

    /// Author handle
    #[serde(rename = "op")]
    pub author: String,

    pub subreddit: String,

    /// Creation time; `None` when the attribute was missing or malformed
    pub timestamp: Option<DateTime<Utc>>,

    /// Net score, negative for downvoted posts
    pub score: i64,

    pub comment_count: u64,

    /// Absolute `https` thumbnail URL; empty when the site shows a
    /// placeholder icon instead of a real image
    #[serde(rename = "thumbnailLink")]
    pub thumbnail_url: String,

    /// Canonical link of the post (self posts are site-relative)
    #[serde(rename = "postLink")]
    pub post_url: String,

    #[serde(rename = "commentsLink")]
    pub comments_url: String,

    pub is_spoiler: bool,

    #[serde(rename = "isNSFW")]
    pub is_nsfw: bool,
}

impl FeedPost {
    /// Re-derive `kind` from `post_url`
    pub(crate) fn with_classification(mut self) -> Self {
        self.kind = classify(&self.post_url);
        self
    }
}

/// An ordered page of posts plus the link to the following page
///
/// Post order is the site's ranking and is preserved as found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feed {
    pub posts: Vec<FeedPost>,

    /// Relative link to the next page. `None` when the page yielded no
    /// posts, since the link is keyed on the last post's ID.
    #[serde(rename = "nextPageLink", skip_serializing_if = "Option::is_none", default)]
    pub next_page: Option<String>,
}

impl Feed {
    /// Assemble a feed, deriving the next-page link from the last post
    #[must_use]
    pub fn new(posts: Vec<FeedPost>, options: &FeedOptions) -> Self {
        let next_page = posts
            .last()
            .map(|post| options.next_page_url(&post.id));
        Self { posts, next_page }
    }

    /// ID of the last post, the cursor for the next page
    #[must_use]
    pub fn last_post_id(&self) -> Option<&str> {
        self.posts.last().map(|post| post.id.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
