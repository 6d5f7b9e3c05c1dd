//! Listing URL construction for `FeedOptions`

use url::form_urlencoded;

use super::types::FeedOptions;

impl FeedOptions {
    /// URL of the listing page these options describe
    ///
    /// Layout: `{base}[/r/{subreddit}][/?{query}]` where the query carries
    /// `after`, `count` (when non-zero) and `sort` (when not the default), in
    /// that key order.
    #[must_use]
    pub fn feed_url(&self) -> String {
        let mut url = self.base_url.clone();
        if let Some(subreddit) = &self.subreddit {
            url.push_str("/r/");
            url.push_str(subreddit);
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(after) = &self.after {
            query.append_pair("after", after);
        }
        if self.count != 0 {
            query.append_pair("count", &self.count.to_string());
        }
        if let Some(sort) = self.sort.as_query() {
            query.append_pair("sort", sort);
        }

        let query = query.finish();
        if !query.is_empty() {
            url.push_str("/?");
            url.push_str(&query);
        }

        url
    }

    /// Relative link to the page following the one whose last post is
    /// `last_post_id`
    ///
    /// The link keeps subreddit, sort and count, drops the base URL so it
    /// points back at whoever serves the feed, and moves the cursor.
    #[must_use]
    pub fn next_page_url(&self, last_post_id: &str) -> String {
        FeedOptions {
            base_url: String::new(),
            after: Some(last_post_id.to_string()),
            ..self.clone()
        }
        .feed_url()
    }
}
