//! Post kind inference from the canonical link
//!
//! Rules are evaluated top to bottom and the first match wins, so the order
//! of `RULES` is the tie-break: a self post whose path ends in `.png` is still
//! a text post.

use super::types::FeedPostType;
use crate::utils::{GALLERY_PREFIX, IMAGE_SUFFIXES, SELF_POST_PREFIX, VIDEO_PREFIXES};

type Rule = fn(&str) -> bool;

const RULES: &[(Rule, FeedPostType)] = &[
    (is_self_post, FeedPostType::Text),
    (is_image, FeedPostType::Image),
    (is_gallery, FeedPostType::Gallery),
    (is_video, FeedPostType::Video),
];

fn is_self_post(url: &str) -> bool {
    url.starts_with(SELF_POST_PREFIX)
}

fn is_image(url: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suffix| url.ends_with(suffix))
}

fn is_gallery(url: &str) -> bool {
    url.starts_with(GALLERY_PREFIX)
}

fn is_video(url: &str) -> bool {
    VIDEO_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

/// Kind of the post whose canonical link is `post_url`; `Link` when no rule applies
#[must_use]
pub fn classify(post_url: &str) -> FeedPostType {
    RULES
        .iter()
        .find(|(rule, _)| rule(post_url))
        .map_or(FeedPostType::Link, |(_, kind)| *kind)
}
