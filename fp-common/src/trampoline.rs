//! # Trampolines
//!
//! Stack-safe tail calls for Rust, which does not guarantee tail-call
//! elimination.
//!
//! A logically recursive procedure returns a [`Trampoline`] instead of
//! calling itself: either the finished value ([`Trampoline::Done`]) or a
//! thunk that produces the next step ([`Trampoline::Suspended`]).
//! [`Trampoline::evaluate`] then drives the chain with a plain loop, so the
//! recursion depth costs heap allocations instead of stack frames.
//!
//! ## Scheme equivalent
//!
//! ```scheme
//! (define (count-down n)
//!   (if (= n 0) 'done (count-down (- n 1))))
//! ```
//!
//! ## Example
//!
//! ```
//! use fp_common::trampoline::{done, suspend, Trampoline};
//!
//! fn count_down(n: u64) -> Trampoline<'static, &'static str> {
//!     if n == 0 {
//!         done("done")
//!     } else {
//!         suspend(move || count_down(n - 1))
//!     }
//! }
//!
//! // A million nested calls, constant stack.
//! assert_eq!(count_down(1_000_000).evaluate(), "done");
//! ```

use std::fmt;

/// The deferred rest of a computation.
pub type Thunk<'a, T> = Box<dyn FnOnce() -> Trampoline<'a, T> + 'a>;

/// A computation that has either finished or can take one more step.
///
/// The lifetime `'a` bounds whatever the suspended thunks borrow, which lets
/// a traversal walk a borrowed list without cloning its nodes.
pub enum Trampoline<'a, T> {
    /// The computation is complete.
    Done(T),
    /// One more step is needed; calling the thunk yields the next state.
    Suspended(Thunk<'a, T>),
}

impl<'a, T> Trampoline<'a, T> {
    /// Wraps a finished value.
    #[inline]
    pub fn done(value: T) -> Self {
        Trampoline::Done(value)
    }

    /// Defers a step. The thunk must itself return a trampoline, which is
    /// what allows chains of unbounded length.
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Trampoline<'a, T> + 'a,
    {
        Trampoline::Suspended(Box::new(thunk))
    }

    /// Returns true if no further steps remain.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Trampoline::Done(_))
    }

    /// Runs the computation to completion.
    ///
    /// Each suspended step is invoked and replaced by its result until a
    /// [`Trampoline::Done`] is reached. Intermediate steps are dropped as the
    /// loop advances. A thunk chain that never reaches `Done` loops forever.
    ///
    /// # Example
    /// ```
    /// use fp_common::trampoline::Trampoline;
    ///
    /// let t = Trampoline::suspend(|| Trampoline::suspend(|| Trampoline::done(42)));
    /// assert_eq!(t.evaluate(), 42);
    /// ```
    pub fn evaluate(self) -> T {
        let mut current = self;
        let mut steps: u64 = 0;
        loop {
            match current {
                Trampoline::Done(value) => {
                    tracing::trace!(steps, "trampoline finished");
                    return value;
                }
                Trampoline::Suspended(thunk) => {
                    steps += 1;
                    current = thunk();
                }
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Trampoline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trampoline::Done(value) => f.debug_tuple("Done").field(value).finish(),
            Trampoline::Suspended(_) => f.write_str("Suspended(..)"),
        }
    }
}

/// Free-function form of [`Trampoline::done`].
#[inline]
pub fn done<'a, T>(value: T) -> Trampoline<'a, T> {
    Trampoline::done(value)
}

/// Free-function form of [`Trampoline::suspend`].
#[inline]
pub fn suspend<'a, T, F>(thunk: F) -> Trampoline<'a, T>
where
    F: FnOnce() -> Trampoline<'a, T> + 'a,
{
    Trampoline::suspend(thunk)
}

/// Free-function form of [`Trampoline::evaluate`].
#[inline]
pub fn evaluate<T>(trampoline: Trampoline<'_, T>) -> T {
    trampoline.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(acc: u64, remaining: u64) -> Trampoline<'static, u64> {
        if remaining == 0 {
            done(acc)
        } else {
            suspend(move || count(acc + 1, remaining - 1))
        }
    }

    #[test]
    fn test_done_evaluates_immediately() {
        let t: Trampoline<'_, i32> = done(7);
        assert!(t.is_done());
        assert_eq!(t.evaluate(), 7);
    }

    #[test]
    fn test_suspended_chain() {
        let t = count(0, 10);
        assert!(!t.is_done());
        assert_eq!(evaluate(t), 10);
    }

    #[test]
    fn test_million_steps_do_not_grow_stack() {
        assert_eq!(count(0, 1_000_000).evaluate(), 1_000_000);
    }

    #[test]
    fn test_thunks_may_borrow() {
        fn sum<'a>(items: &'a [u64], acc: u64) -> Trampoline<'a, u64> {
            match items.split_first() {
                None => done(acc),
                Some((x, rest)) => suspend(move || sum(rest, acc + x)),
            }
        }

        let items: Vec<u64> = (1..=100).collect();
        assert_eq!(sum(&items, 0).evaluate(), 5050);
    }

    #[test]
    fn test_debug_hides_thunk() {
        assert_eq!(format!("{:?}", done::<u8>(1)), "Done(1)");
        assert_eq!(format!("{:?}", count(0, 1)), "Suspended(..)");
    }
}
