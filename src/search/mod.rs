//! Predicate-driven search over parsed HTML trees
//!
//! This module provides generic breadth-first and depth-first traversals over
//! a `scraper` document, driven by composable `Criterion` predicates and a
//! descend policy that decides which non-matching subtrees are worth entering.
//! Nothing here mutates the tree.

pub mod criteria;
pub mod engine;
pub mod errors;
pub mod node;

pub use criteria::Criterion;
pub use engine::{breadth_first, depth_first};
pub use errors::{SearchError, SearchResult};
pub use node::{attribute, is_document_sentinel, nth_child, tag_name, text_of_first_child};
