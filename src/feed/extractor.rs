//! Listing page to `FeedPost` extraction
//!
//! The page keeps authoritative values in `data-*` attributes on each post
//! element and everything else (title, thumbnail, comments link) in
//! presentational descendants. The extractor reads the former directly and
//! looks the latter up with the search engine, tolerating every miss.
//!
//! ```text
//! <div id="siteTable">
//!   <div class="thing ..." data-fullname="t3_..." data-url="..." ...>
//!     <a class="thumbnail ..."><img src="//..."></a>
//!     <div class="entry ...">
//!       <div class="top-matter">
//!         <p class="title"><a class="title ...">[TITLE]</a></p>
//!         <ul class="flat-list buttons">
//!           <li class="first"><a class="bylink comments ..." href="[COMMENTS]">..</a></li>
//!         </ul>
//!       </div>
//!     </div>
//!   </div>
//!   <div class="clearleft"></div>
//!   ...
//! </div>
//! ```

use std::sync::LazyLock;

use ego_tree::NodeRef;
use scraper::Node;
use tracing::{debug, trace};

use super::attributes::{parse_bool, parse_millis};
use super::errors::{ExtractError, SkipReason};
use super::types::FeedPost;
use crate::search::{Criterion, attribute, breadth_first, depth_first, text_of_first_child};
use crate::utils::{
    AD_MARKER_ATTRIBUTE, ATTR_AUTHOR, ATTR_COMMENTS_COUNT, ATTR_FULLNAME, ATTR_NSFW, ATTR_SCORE,
    ATTR_SPOILER, ATTR_SUBREDDIT, ATTR_TIMESTAMP, ATTR_URL, COMMENTS_CLASS_PATTERN,
    FIRST_BUTTON_CLASS, PADDING_CLASSES, POSTS_CONTAINER_ID, THUMBNAIL_CLASS_PATTERN,
    TITLE_CLASS_PATTERN, to_https_url,
};

// Criteria are built once and shared by every extraction.
// Hardcoded patterns should NEVER fail to compile - if they do, it's a bug.

static POSTS_CONTAINER: LazyLock<Criterion> = LazyLock::new(|| {
    Criterion::tag("div") & Criterion::attribute_equals("id", POSTS_CONTAINER_ID)
});

static OUTSIDE_HEAD: LazyLock<Criterion> = LazyLock::new(|| !Criterion::tag("head"));

static ANYWHERE: LazyLock<Criterion> = LazyLock::new(Criterion::always);

static TITLE_LINK: LazyLock<Criterion> = LazyLock::new(|| {
    Criterion::tag("a")
        & Criterion::attribute_pattern("class", TITLE_CLASS_PATTERN)
            .expect("BUG: hardcoded title class pattern is invalid")
});

static THUMBNAIL_LINK: LazyLock<Criterion> = LazyLock::new(|| {
    Criterion::tag("a")
        & Criterion::attribute_pattern("class", THUMBNAIL_CLASS_PATTERN)
            .expect("BUG: hardcoded thumbnail class pattern is invalid")
});

static THUMBNAIL_IMAGE: LazyLock<Criterion> =
    LazyLock::new(|| Criterion::tag("img") & Criterion::has_attribute("src"));

static BUTTONS_BAR: LazyLock<Criterion> = LazyLock::new(|| Criterion::tag("ul"));

static FIRST_BUTTON: LazyLock<Criterion> = LazyLock::new(|| {
    Criterion::tag("li") & Criterion::attribute_equals("class", FIRST_BUTTON_CLASS)
});

static COMMENTS_LINK: LazyLock<Criterion> = LazyLock::new(|| {
    Criterion::tag("a")
        & Criterion::attribute_pattern("class", COMMENTS_CLASS_PATTERN)
            .expect("BUG: hardcoded comments class pattern is invalid")
});

/// Extract every post of a parsed listing page, in page order
///
/// `root` is normally the document root. Element children of the posts
/// container that are spacers or advertisements are left out; every other
/// element child yields exactly one post, however little of it could be read.
///
/// # Errors
///
/// Returns `ExtractError::ContainerNotFound` when the page has no posts
/// container. This is the only failure that aborts the page.
pub fn extract_posts(root: NodeRef<'_, Node>) -> Result<Vec<FeedPost>, ExtractError> {
    let container = find_posts_container(root)?;

    let mut posts = Vec::new();
    let mut skipped = 0usize;
    for child in container.children().filter(|c| c.value().is_element()) {
        match parse_post(child) {
            Ok(post) => posts.push(post),
            Err(reason) => {
                skipped += 1;
                trace!(%reason, "skipping listing child");
            }
        }
    }

    debug!(posts = posts.len(), skipped, "extracted listing posts");
    Ok(posts)
}

/// Locate the element whose children are the posts
///
/// The head section is never entered; the container always lives in the body.
fn find_posts_container(root: NodeRef<'_, Node>) -> Result<NodeRef<'_, Node>, ExtractError> {
    breadth_first(root, &POSTS_CONTAINER, &OUTSIDE_HEAD).map_err(ExtractError::ContainerNotFound)
}

/// Why `node` is not a post, if it is one of the known non-post children
fn skip_reason(node: NodeRef<'_, Node>) -> Option<SkipReason> {
    if attribute(node, "class").is_some_and(|class| PADDING_CLASSES.contains(&class)) {
        return Some(SkipReason::Padding);
    }
    if attribute(node, AD_MARKER_ATTRIBUTE).is_some() {
        return Some(SkipReason::Advertisement);
    }
    None
}

/// Build one post from a child of the posts container
///
/// Malformed data attributes and missing descendants degrade to empty or
/// zero fields; only the explicit skip markers reject the node.
///
/// # Errors
///
/// Returns the `SkipReason` for spacer and advertisement children.
pub fn parse_post(node: NodeRef<'_, Node>) -> Result<FeedPost, SkipReason> {
    if let Some(reason) = skip_reason(node) {
        return Err(reason);
    }

    let text = |key: &str| attribute(node, key).unwrap_or_default().to_string();

    let post = FeedPost {
        id: text(ATTR_FULLNAME),
        author: text(ATTR_AUTHOR),
        subreddit: text(ATTR_SUBREDDIT),
        timestamp: attribute(node, ATTR_TIMESTAMP).and_then(parse_millis),
        score: attribute(node, ATTR_SCORE)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
        comment_count: attribute(node, ATTR_COMMENTS_COUNT)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
        post_url: text(ATTR_URL),
        is_spoiler: attribute(node, ATTR_SPOILER)
            .and_then(parse_bool)
            .unwrap_or_default(),
        is_nsfw: attribute(node, ATTR_NSFW)
            .and_then(parse_bool)
            .unwrap_or_default(),
        title: find_title(node).unwrap_or_default(),
        thumbnail_url: find_thumbnail_url(node).unwrap_or_default(),
        comments_url: find_comments_url(node).unwrap_or_default(),
        ..FeedPost::default()
    };

    Ok(post.with_classification())
}

/// Text of the first `<a class="title ...">` in pre-order
fn find_title(node: NodeRef<'_, Node>) -> Option<String> {
    let Ok(link) = depth_first(node, &TITLE_LINK, &ANYWHERE) else {
        trace!("title link not found");
        return None;
    };
    text_of_first_child(link).map(str::to_string)
}

/// Absolute URL of the thumbnail image
///
/// The thumbnail anchor exists even for posts without a thumbnail; the site
/// then renders a placeholder icon and the anchor has no `<img>`.
fn find_thumbnail_url(node: NodeRef<'_, Node>) -> Option<String> {
    let anchor = breadth_first(node, &THUMBNAIL_LINK, &ANYWHERE).ok()?;
    let Ok(image) = breadth_first(anchor, &THUMBNAIL_IMAGE, &ANYWHERE) else {
        trace!("thumbnail anchor has no image");
        return None;
    };
    attribute(image, "src").map(to_https_url)
}

/// `href` of the comments button in the post's buttons bar
fn find_comments_url(node: NodeRef<'_, Node>) -> Option<String> {
    let bar = breadth_first(node, &BUTTONS_BAR, &ANYWHERE).ok()?;
    let button = breadth_first(bar, &FIRST_BUTTON, &ANYWHERE).ok()?;
    let link = breadth_first(button, &COMMENTS_LINK, &ANYWHERE).ok()?;
    attribute(link, "href").map(str::to_string)
}
