//! Composable node predicates
//!
//! A `Criterion` is a pure, side-effect-free test over a single node. It is
//! evaluated on every visited node, so constructors capture everything they
//! need up front (regexes are compiled once, never per node).
//!
//! Criteria compose with `Criterion::all`, `Criterion::any` and
//! `Criterion::not`, or with the `&`, `|` and `!` operators:
//!
//! ```
//! use feedscrape::search::Criterion;
//!
//! let title_link = Criterion::tag("a") & Criterion::attribute_equals("class", "title");
//! let skip_head = !Criterion::tag("head");
//! # let _ = (title_link, skip_head);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use ego_tree::NodeRef;
use regex::Regex;
use scraper::Node;

use super::node::{attribute, tag_name};

type Predicate = dyn Fn(NodeRef<'_, Node>) -> bool + Send + Sync;

/// A boolean predicate over one document node
#[derive(Clone)]
pub struct Criterion {
    predicate: Arc<Predicate>,
}

impl Criterion {
    /// Wrap an arbitrary predicate
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(NodeRef<'_, Node>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the criterion against `node`
    #[inline]
    #[must_use]
    pub fn matches(&self, node: NodeRef<'_, Node>) -> bool {
        (self.predicate)(node)
    }

    /// Matches every node. Used as a descend policy to search the whole subtree.
    #[must_use]
    pub fn always() -> Self {
        Self::from_fn(|_| true)
    }

    /// Matches no node. Used as a descend policy to examine only the root.
    #[must_use]
    pub fn never() -> Self {
        Self::from_fn(|_| false)
    }

    /// Element whose local tag name is `name`
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::from_fn(move |node| tag_name(node) == Some(name.as_str()))
    }

    /// Element carrying an attribute named `key`
    #[must_use]
    pub fn has_attribute(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::from_fn(move |node| attribute(node, &key).is_some())
    }

    /// Element whose first `key` attribute equals `value` exactly
    #[must_use]
    pub fn attribute_equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        Self::from_fn(move |node| attribute(node, &key) == Some(value.as_str()))
    }

    /// Element whose first `key` attribute matches `regex` anywhere in its value
    #[must_use]
    pub fn attribute_matches(key: impl Into<String>, regex: Regex) -> Self {
        let key = key.into();
        Self::from_fn(move |node| attribute(node, &key).is_some_and(|value| regex.is_match(value)))
    }

    /// Compile `pattern` and build an `attribute_matches` criterion from it
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for an invalid pattern.
    pub fn attribute_pattern(key: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::attribute_matches(key, Regex::new(pattern)?))
    }

    /// True only when every member is true; stops at the first false.
    /// An empty set is true.
    #[must_use]
    pub fn all(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        let criteria: Vec<Criterion> = criteria.into_iter().collect();
        Self::from_fn(move |node| criteria.iter().all(|c| c.matches(node)))
    }

    /// True when any member is true; stops at the first true.
    /// An empty set is false.
    #[must_use]
    pub fn any(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        let criteria: Vec<Criterion> = criteria.into_iter().collect();
        Self::from_fn(move |node| criteria.iter().any(|c| c.matches(node)))
    }

    /// Logical inversion of `criterion`
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(criterion: Criterion) -> Self {
        Self::from_fn(move |node| !criterion.matches(node))
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion").finish_non_exhaustive()
    }
}

impl BitAnd for Criterion {
    type Output = Criterion;

    fn bitand(self, rhs: Criterion) -> Criterion {
        Criterion::all([self, rhs])
    }
}

impl BitOr for Criterion {
    type Output = Criterion;

    fn bitor(self, rhs: Criterion) -> Criterion {
        Criterion::any([self, rhs])
    }
}

impl Not for Criterion {
    type Output = Criterion;

    fn not(self) -> Criterion {
        Criterion::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn first_tag<'a>(doc: &'a Html, name: &str) -> NodeRef<'a, Node> {
        doc.tree
            .root()
            .descendants()
            .find(|n| tag_name(*n) == Some(name))
            .expect("tag present in fixture")
    }

    #[test]
    fn test_tag_matches_elements_only() {
        let doc = Html::parse_fragment("<div>a</div>");
        let div = first_tag(&doc, "div");
        let text = div.first_child().expect("text child");

        assert!(Criterion::tag("div").matches(div));
        assert!(!Criterion::tag("span").matches(div));
        assert!(!Criterion::tag("div").matches(text));
        assert!(!Criterion::tag("div").matches(doc.tree.root()));
    }

    #[test]
    fn test_tag_accepts_runtime_names() {
        let doc = Html::parse_fragment("<section>a</section>");
        let section = first_tag(&doc, "section");

        let name = format!("sec{}", "tion");
        assert!(Criterion::tag(name).matches(section));
        assert!(!Criterion::tag(String::from("div")).matches(section));
    }

    #[test]
    fn test_attribute_criteria() {
        let doc = Html::parse_fragment(r#"<a class="title may-blank" href="/r/x">t</a>"#);
        let a = first_tag(&doc, "a");

        assert!(Criterion::has_attribute("href").matches(a));
        assert!(!Criterion::has_attribute("src").matches(a));
        assert!(Criterion::attribute_equals("href", "/r/x").matches(a));
        assert!(!Criterion::attribute_equals("class", "title").matches(a));

        let title = Criterion::attribute_pattern("class", "title.*").expect("valid pattern");
        assert!(title.matches(a));
        let comments = Criterion::attribute_pattern("class", ".*comments.*").expect("valid pattern");
        assert!(!comments.matches(a));
    }

    #[test]
    fn test_regex_is_unanchored() {
        let doc = Html::parse_fragment(r#"<a class="bylink comments may-blank">c</a>"#);
        let a = first_tag(&doc, "a");

        let criterion = Criterion::attribute_pattern("class", "comments").expect("valid pattern");
        assert!(criterion.matches(a));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(Criterion::attribute_pattern("class", "(unclosed").is_err());
    }

    #[test]
    fn test_combinators() {
        let doc = Html::parse_fragment(r#"<div id="siteTable"></div>"#);
        let div = first_tag(&doc, "div");

        let site_table = Criterion::tag("div") & Criterion::attribute_equals("id", "siteTable");
        assert!(site_table.matches(div));

        let wrong = Criterion::tag("span") | Criterion::attribute_equals("id", "other");
        assert!(!wrong.matches(div));

        assert!((!wrong).matches(div));
        assert!(Criterion::all([]).matches(div));
        assert!(!Criterion::any([]).matches(div));
        assert!(Criterion::always().matches(div));
        assert!(!Criterion::never().matches(div));
    }

    #[test]
    fn test_all_short_circuits_on_first_false() {
        let doc = Html::parse_fragment("<p></p>");
        let p = first_tag(&doc, "p");

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = {
            let calls = Arc::clone(&calls);
            Criterion::from_fn(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            })
        };

        assert!(!Criterion::all([Criterion::never(), counter.clone()]).matches(p));
        assert!(Criterion::any([Criterion::always(), counter]).matches(p));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
