//! Stack-safe recursive procedures.
//!
//! Classic tail-recursive procedures (linear iteration with accumulators,
//! Euclid's algorithm, Fibonacci) and list aggregates, all running on the
//! trampoline from `fp_common` so their depth never touches the call stack:
//! - 재귀와 반복 (Recursion and iteration): [`recursion`]
//! - 리스트 집계 (List aggregates): [`aggregate`]

pub mod aggregate;
pub mod error;
pub mod recursion;

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use error::TailRecError;
pub use recursion::{add, factorial, fib, gcd, range};
