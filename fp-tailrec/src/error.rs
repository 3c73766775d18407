//! Errors for the checked recursive procedures.

use fp_common::ListError;
use thiserror::Error;

/// Failures of the checked procedures in [`recursion`](crate::recursion)
/// and [`aggregate`](crate::aggregate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TailRecError {
    /// The result does not fit the procedure's integer type.
    #[error("{operation} overflowed for input {input}")]
    Overflow { operation: &'static str, input: u64 },

    /// A list operation needed a non-empty list.
    #[error(transparent)]
    List(#[from] ListError),
}
