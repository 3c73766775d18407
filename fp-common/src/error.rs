//! # List Errors
//!
//! A single failure kind: asking an empty list for something only a
//! non-empty list has.

use thiserror::Error;

/// Errors raised by [`List`](crate::list::List) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `head`, `tail`, `set_head` or `init` was called on the empty list.
    #[error("{operation} called on empty list")]
    EmptyListAccess {
        /// Name of the operation that required a non-empty list.
        operation: &'static str,
    },
}

impl ListError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        tracing::debug!(operation, "empty list access");
        ListError::EmptyListAccess { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_operation() {
        let err = ListError::EmptyListAccess { operation: "head" };
        assert_eq!(err.to_string(), "head called on empty list");
    }
}
