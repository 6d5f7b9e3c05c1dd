pub mod config;
pub mod feed;
pub mod search;
pub mod utils;

pub use config::{ConfigError, FeedOptions, FeedOptionsBuilder, SortMethod};
pub use feed::{
    ExtractError, Feed, FeedPost, FeedPostType, SkipReason, classify, extract_posts, parse_feed,
    time_since,
};
pub use search::{Criterion, SearchError, SearchResult, breadth_first, depth_first};
pub use utils::to_https_url;
