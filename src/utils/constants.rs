//! Markup markers and URL shapes of the old-layout listing page
//!
//! These values describe the one page layout the extractor is built against.

/// Host used for outbound feed URLs unless the caller overrides it
pub const DEFAULT_BASE_URL: &str = "http://old.reddit.com";

/// `id` of the `<div>` whose immediate children are the posts
pub const POSTS_CONTAINER_ID: &str = "siteTable";

/// `class` values of spacer children that never hold a post
pub const PADDING_CLASSES: &[&str] = &["clearleft", "nav-buttons"];

/// Attribute present only on promoted (advertisement) entries
pub const AD_MARKER_ATTRIBUTE: &str = "data-adserver-impression-id";

/// `class` of the buttons-bar item that wraps the comments link
pub const FIRST_BUTTON_CLASS: &str = "first";

/// Class patterns for the per-post descendant lookups
pub const TITLE_CLASS_PATTERN: &str = "title.*";
pub const THUMBNAIL_CLASS_PATTERN: &str = "thumbnail.*";
pub const COMMENTS_CLASS_PATTERN: &str = ".*comments.*";

// Data attributes read directly off each post element
pub const ATTR_FULLNAME: &str = "data-fullname";
pub const ATTR_AUTHOR: &str = "data-author";
pub const ATTR_SUBREDDIT: &str = "data-subreddit";
pub const ATTR_TIMESTAMP: &str = "data-timestamp";
pub const ATTR_SCORE: &str = "data-score";
pub const ATTR_COMMENTS_COUNT: &str = "data-comments-count";
pub const ATTR_URL: &str = "data-url";
pub const ATTR_SPOILER: &str = "data-spoiler";
pub const ATTR_NSFW: &str = "data-nsfw";

/// Post links relative to the site itself are self (text) posts
pub const SELF_POST_PREFIX: &str = "/r/";

/// Suffixes of direct links to static images
pub const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".png"];

/// Prefix of multi-image gallery posts
pub const GALLERY_PREFIX: &str = "https://www.reddit.com/gallery/";

/// Prefixes of the site's own video hosts
pub const VIDEO_PREFIXES: &[&str] = &["https://v.reddit.com/", "https://v.redd.it/"];
