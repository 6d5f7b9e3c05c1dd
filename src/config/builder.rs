//! Validating builder for `FeedOptions`
//!
//! Setters never fail; everything is checked once in `build()` so callers can
//! chain freely and get a single error for the first invalid field.

use url::Url;

use super::types::{ConfigError, FeedOptions, SortMethod};

#[derive(Debug, Clone)]
pub struct FeedOptionsBuilder {
    pub(crate) base_url: String,
    pub(crate) subreddit: Option<String>,
    pub(crate) sort: SortMethod,
    pub(crate) count: u32,
    pub(crate) after: Option<String>,
}

impl Default for FeedOptionsBuilder {
    fn default() -> Self {
        FeedOptions::default().into()
    }
}

/// Start from existing options, e.g. to change the cursor of a request
impl From<FeedOptions> for FeedOptionsBuilder {
    fn from(options: FeedOptions) -> Self {
        Self {
            base_url: options.base_url,
            subreddit: options.subreddit,
            sort: options.sort,
            count: options.count,
            after: options.after,
        }
    }
}

impl FeedOptions {
    /// Start building options for a feed request
    #[must_use]
    pub fn builder() -> FeedOptionsBuilder {
        FeedOptionsBuilder::default()
    }
}

impl FeedOptionsBuilder {
    /// Host the feed is requested from. An empty string yields relative links.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn subreddit(mut self, subreddit: impl Into<String>) -> Self {
        self.subreddit = Some(subreddit.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortMethod) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Page cursor: ID of the last post on the previous page
    #[must_use]
    pub fn after(mut self, last_post_id: impl Into<String>) -> Self {
        self.after = Some(last_post_id.into());
        self
    }

    /// Apply the routing conventions of an incoming listing path
    ///
    /// `/r/{name}/...` selects a subreddit, a trailing segment naming a sort
    /// order selects it, and a non-empty `after` query value sets the cursor.
    /// Segments that mean nothing are ignored.
    #[must_use]
    pub fn from_request(mut self, path: &str, query: Option<&str>) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut sort_candidate_from = 0;
        if let ["r", name, ..] = segments.as_slice() {
            self.subreddit = Some((*name).to_string());
            sort_candidate_from = 2;
        }

        if let Some(last) = segments.get(sort_candidate_from..).and_then(<[&str]>::last)
            && let Ok(sort) = last.parse::<SortMethod>()
        {
            self.sort = sort;
        }

        if let Some(query) = query
            && let Some((_, after)) = url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, value)| key == "after" && !value.is_empty())
        {
            self.after = Some(after.into_owned());
        }

        self
    }

    /// Validate and produce the options
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidBaseUrl` if the base URL is non-empty and not an
    ///   absolute `http`/`https` URL
    /// - `ConfigError::InvalidSubreddit` if the subreddit name is empty or
    ///   contains `/`, `?`, `#` or whitespace
    pub fn build(self) -> Result<FeedOptions, ConfigError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !base_url.is_empty() {
            let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
                url: base_url.clone(),
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidBaseUrl {
                    url: base_url,
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
        }

        if let Some(name) = &self.subreddit
            && (name.is_empty()
                || name
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#')))
        {
            return Err(ConfigError::InvalidSubreddit(name.clone()));
        }

        Ok(FeedOptions {
            base_url,
            subreddit: self.subreddit,
            sort: self.sort,
            count: self.count,
            after: self.after.filter(|id| !id.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = FeedOptions::builder().build().expect("defaults are valid");
        assert_eq!(options, FeedOptions::default());
    }

    #[test]
    fn test_builder_starts_from_option_defaults() {
        let builder = FeedOptionsBuilder::default();
        let defaults = FeedOptions::default();

        assert_eq!(builder.base_url, defaults.base_url);
        assert_eq!(builder.subreddit, defaults.subreddit);
        assert_eq!(builder.sort, defaults.sort);
        assert_eq!(builder.count, defaults.count);
        assert_eq!(builder.after, defaults.after);
    }

    #[test]
    fn test_builder_from_existing_options() {
        let options = FeedOptions::builder()
            .subreddit("rust")
            .sort(SortMethod::New)
            .build()
            .expect("valid options");

        let next = FeedOptionsBuilder::from(options.clone())
            .after("t3_next")
            .build()
            .expect("valid options");

        assert_eq!(next.subreddit(), options.subreddit());
        assert_eq!(next.sort(), SortMethod::New);
        assert_eq!(next.after(), Some("t3_next"));
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = FeedOptions::builder()
            .base_url("https://old.reddit.com/")
            .subreddit("rust")
            .sort(SortMethod::Top)
            .count(25)
            .after("t3_abc")
            .build()
            .expect("valid options");

        assert_eq!(options.base_url, "https://old.reddit.com");
        assert_eq!(options.subreddit.as_deref(), Some("rust"));
        assert_eq!(options.sort, SortMethod::Top);
        assert_eq!(options.count, 25);
        assert_eq!(options.after.as_deref(), Some("t3_abc"));
    }

    #[test]
    fn test_empty_base_url_is_allowed() {
        let options = FeedOptions::builder().base_url("").build().expect("valid");
        assert_eq!(options.base_url, "");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FeedOptions::builder()
            .base_url("old.reddit.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));

        let err = FeedOptions::builder()
            .base_url("ftp://old.reddit.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_invalid_subreddit() {
        for name in ["", "a/b", "has space", "q?x"] {
            let err = FeedOptions::builder().subreddit(name).build().unwrap_err();
            assert_eq!(err, ConfigError::InvalidSubreddit(name.to_string()));
        }
    }

    #[test]
    fn test_empty_cursor_is_dropped() {
        let options = FeedOptions::builder().after("").build().expect("valid");
        assert!(options.after.is_none());
    }

    #[test]
    fn test_from_request_front_page() {
        let options = FeedOptions::builder()
            .from_request("/", None)
            .build()
            .expect("valid");
        assert!(options.subreddit.is_none());
        assert_eq!(options.sort, SortMethod::Default);

        let options = FeedOptions::builder()
            .from_request("/top", Some("after=t3_xyz"))
            .build()
            .expect("valid");
        assert_eq!(options.sort, SortMethod::Top);
        assert_eq!(options.after.as_deref(), Some("t3_xyz"));
    }

    #[test]
    fn test_from_request_subreddit() {
        let options = FeedOptions::builder()
            .from_request("/r/comics/new/", Some("count=25&after=t3_q"))
            .build()
            .expect("valid");
        assert_eq!(options.subreddit.as_deref(), Some("comics"));
        assert_eq!(options.sort, SortMethod::New);
        assert_eq!(options.after.as_deref(), Some("t3_q"));
    }

    #[test]
    fn test_from_request_subreddit_named_like_sort() {
        let options = FeedOptions::builder()
            .from_request("/r/top", None)
            .build()
            .expect("valid");
        assert_eq!(options.subreddit.as_deref(), Some("top"));
        assert_eq!(options.sort, SortMethod::Default);
    }

    #[test]
    fn test_from_request_ignores_unknown_segments() {
        let options = FeedOptions::builder()
            .from_request("/r/foo/comments/abc/title", Some("after="))
            .build()
            .expect("valid");
        assert_eq!(options.subreddit.as_deref(), Some("foo"));
        assert_eq!(options.sort, SortMethod::Default);
        assert!(options.after.is_none());
    }
}
