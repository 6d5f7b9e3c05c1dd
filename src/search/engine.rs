//! Breadth-first and depth-first node search
//!
//! Both traversals return the first node satisfying `matches`. A visited node
//! that does not match has its children queued only when it is a document
//! sentinel or when `descend` accepts it; otherwise its whole subtree is
//! skipped. Traversal state lives in a per-call queue or stack, so concurrent
//! searches over distinct trees never interact.

use std::collections::VecDeque;

use ego_tree::NodeRef;
use scraper::Node;

use super::criteria::Criterion;
use super::errors::{SearchError, SearchResult};
use super::node::is_document_sentinel;

/// Whether the children of a visited, non-matching node should be explored.
///
/// Document roots never satisfy element criteria, so they are always expanded
/// independently of the descend policy.
#[inline]
fn should_expand(node: NodeRef<'_, Node>, descend: &Criterion) -> bool {
    is_document_sentinel(node) || descend.matches(node)
}

/// Level-order search starting at `root` (inclusive)
///
/// # Errors
///
/// Returns `SearchError::SearchFailed` once every reachable node has been
/// visited without a match.
pub fn breadth_first<'a>(
    root: NodeRef<'a, Node>,
    matches: &Criterion,
    descend: &Criterion,
) -> SearchResult<NodeRef<'a, Node>> {
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if matches.matches(node) {
            return Ok(node);
        }

        if should_expand(node, descend) {
            queue.extend(node.children());
        }
    }

    Err(SearchError::SearchFailed)
}

/// Pre-order search starting at `root` (inclusive)
///
/// Children are pushed in reverse so the first child of a node is examined
/// before its later siblings.
///
/// # Errors
///
/// Returns `SearchError::SearchFailed` once every reachable node has been
/// visited without a match.
pub fn depth_first<'a>(
    root: NodeRef<'a, Node>,
    matches: &Criterion,
    descend: &Criterion,
) -> SearchResult<NodeRef<'a, Node>> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if matches.matches(node) {
            return Ok(node);
        }

        if should_expand(node, descend) {
            stack.extend(node.children().rev());
        }
    }

    Err(SearchError::SearchFailed)
}
