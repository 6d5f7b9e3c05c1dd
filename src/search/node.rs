//! Read-only accessors over parsed document nodes.

use ego_tree::NodeRef;
use scraper::Node;

use super::errors::{SearchError, SearchResult};

/// Whether `node` is a whole-document root (a parsed document or fragment).
///
/// Traversals always expand these, whatever the descend policy says.
#[must_use]
pub fn is_document_sentinel(node: NodeRef<'_, Node>) -> bool {
    matches!(node.value(), Node::Document | Node::Fragment)
}

/// Value of the first attribute named `key`, if `node` is an element carrying it.
#[must_use]
pub fn attribute<'a>(node: NodeRef<'a, Node>, key: &str) -> Option<&'a str> {
    node.value()
        .as_element()?
        .attrs()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

/// Local tag name of an element node.
#[must_use]
pub fn tag_name<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_element().map(|element| element.name())
}

/// Text of the node's first child, when that child is a text node.
#[must_use]
pub fn text_of_first_child<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    let first = node.first_child()?;
    match first.value() {
        Node::Text(text) => Some(&**text),
        _ => None,
    }
}

/// The `n`-th child (0-based) of any node, text and comment nodes included.
pub fn nth_child(node: NodeRef<'_, Node>, n: usize) -> SearchResult<NodeRef<'_, Node>> {
    node.children()
        .nth(n)
        .ok_or(SearchError::ChildOutOfBounds { index: n })
}
