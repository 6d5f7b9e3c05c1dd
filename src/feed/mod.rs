//! Listing page extraction
//!
//! This module turns the HTML of an old-layout listing page into a `Feed`:
//! - `extractor` finds the posts container and builds one `FeedPost` per post
//! - `classify` infers each post's kind from its canonical link
//! - `attributes` parses `data-*` values leniently
//! - `display` renders human-readable projections of posts

pub mod attributes;
pub mod classify;
pub mod display;
pub mod errors;
pub mod extractor;
pub mod types;

pub use classify::classify;
pub use display::time_since;
pub use errors::{ExtractError, SkipReason};
pub use extractor::{extract_posts, parse_post};
pub use types::{Feed, FeedPost, FeedPostType, UnknownPostType};

use scraper::Html;
use tracing::debug;

use crate::config::FeedOptions;

/// Parse a listing page and assemble its feed
///
/// The next-page link is derived from `options` and the last extracted post;
/// a page without posts has no next-page link.
///
/// # Errors
///
/// Returns `ExtractError::ContainerNotFound` if the page has no posts
/// container.
pub fn parse_feed(html: &str, options: &FeedOptions) -> Result<Feed, ExtractError> {
    let document = Html::parse_document(html);
    let posts = extract_posts(document.tree.root())?;
    let feed = Feed::new(posts, options);

    debug!(
        posts = feed.posts.len(),
        next_page = feed.next_page.as_deref().unwrap_or(""),
        "assembled feed"
    );
    Ok(feed)
}
