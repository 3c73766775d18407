//! # FP Common
//!
//! A small functional-programming foundation: an immutable, structurally
//! shared singly-linked list whose traversals all run on a stack-safe
//! trampoline.
//!
//! ## Modules
//!
//! - [`trampoline`]: Suspended computations driven by an explicit loop
//! - [`list`]: Persistent cons lists with trampolined folds and traversals
//! - [`error`]: The [`ListError`] raised by operations that need a non-empty list
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Operations return new values instead of mutating
//! 2. **Shared Structure**: Lists share suffixes through atomically counted tails
//! 3. **Stack Safety**: No operation recurses once per element
//! 4. **Explicit Failure**: Invalid-on-empty operations return `Result`

pub mod error;
pub mod list;
pub mod trampoline;

// Re-export main types for convenience
pub use error::ListError;
pub use list::List;
pub use trampoline::Trampoline;
