//! Error types for tree search operations
//!
//! Traversals either find a node or fail with a `SearchError` that carries no
//! partial data. Callers decide whether a failed lookup is fatal.

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Error types for search operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The traversal exhausted every reachable node without a match
    #[error("failed to find HTML node with matching criteria")]
    SearchFailed,

    /// A positional child lookup ran past the last child
    #[error("child index {index} out of bounds")]
    ChildOutOfBounds { index: usize },
}

impl SearchError {
    /// Check if the error means "nothing matched" rather than a positional miss
    #[must_use]
    pub fn is_search_failed(&self) -> bool {
        matches!(self, SearchError::SearchFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::SearchFailed.to_string(),
            "failed to find HTML node with matching criteria"
        );
        assert_eq!(
            SearchError::ChildOutOfBounds { index: 4 }.to_string(),
            "child index 4 out of bounds"
        );
    }

    #[test]
    fn test_is_search_failed() {
        assert!(SearchError::SearchFailed.is_search_failed());
        assert!(!SearchError::ChildOutOfBounds { index: 0 }.is_search_failed());
    }
}
