//! # Persistent Lists
//!
//! An immutable singly-linked list with structural sharing, in the shape of
//! Scheme's cons cells: a list is either [`List::Empty`] or a [`List::Node`]
//! holding a head value and a shared pointer to the rest.
//!
//! ## Philosophy
//!
//! - Nothing is ever mutated through a `List` handle. "Updating" operations
//!   such as [`List::set_head`] return a new list.
//! - Tails are shared with [`Arc`], so `cons` is O(1) and many lists may
//!   point at the same suffix. Sharing always points toward older cells, so
//!   reference counting never sees a cycle.
//! - Every traversal that would naturally recurse once per element
//!   (`drop`, `drop_while`, `reverse`, `fold_left`, ...) is written as a
//!   [`Trampoline`] loop, so a list of a million elements costs no stack.
//!
//! ## Example
//!
//! ```
//! use fp_common::{list, List};
//!
//! // Scheme: (define lst (list 1 2 3))
//! let lst: List<i32> = list![1, 2, 3];
//!
//! // Scheme: (car lst) => 1
//! assert_eq!(lst.head(), Ok(&1));
//!
//! // Scheme: (cdr lst) => (2 3)
//! assert_eq!(lst.tail(), Ok(&list![2, 3]));
//!
//! // Scheme: (cons 0 lst) => (0 1 2 3), and lst is untouched
//! let longer = lst.cons(0);
//! assert_eq!(longer, list![0, 1, 2, 3]);
//! assert_eq!(lst.len(), 3);
//! ```

use std::fmt;
use std::mem;
use std::sync::Arc;

use crate::error::ListError;
use crate::trampoline::{Trampoline, done, suspend};

/// A persistent singly-linked list.
///
/// Cloning a list is O(1): it copies one pointer and bumps a reference count.
pub enum List<A> {
    /// The empty list. Every empty list is the same zero-payload value.
    Empty,
    /// A cons cell shared by every list that reaches it.
    Node(Arc<Cons<A>>),
}

/// A cons cell: one element and the (shared) rest of the list.
///
/// Reached by matching on [`List::Node`]:
///
/// ```
/// use fp_common::{list, List};
///
/// if let List::Node(cell) = list![1, 2] {
///     assert_eq!(cell.head(), &1);
///     assert_eq!(cell.tail(), &list![2]);
/// }
/// ```
pub struct Cons<A> {
    head: A,
    tail: List<A>,
}

impl<A> Cons<A> {
    /// The element stored in this cell.
    pub fn head(&self) -> &A {
        &self.head
    }

    /// The list following this cell.
    pub fn tail(&self) -> &List<A> {
        &self.tail
    }
}

// Release chains of uniquely owned cells with a loop. The derived drop glue
// would recurse once per cell and overflow on long lists.
impl<A> Drop for Cons<A> {
    fn drop(&mut self) {
        let mut next = mem::take(&mut self.tail);
        while let List::Node(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut cons) => next = mem::take(&mut cons.tail),
                // Still referenced elsewhere; the other owner frees the rest.
                Err(_) => break,
            }
        }
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        List::Empty
    }
}

impl<A> Clone for List<A> {
    fn clone(&self) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Node(cell) => List::Node(Arc::clone(cell)),
        }
    }
}

/// Builds a list from its elements, first element at the head.
///
/// # Example
/// ```
/// use fp_common::{list, List};
///
/// let xs = list![1, 2, 3];
/// assert_eq!(xs.to_string(), "[1, 2, 3, NIL]");
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::empty()
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::list::List<_> as ::core::iter::FromIterator<_>>::from_iter([$($x),+])
    };
}

// =============================================================================
// Structural primitives
// =============================================================================

impl<A> List<A> {
    /// Returns the empty list.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// '()
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        List::Empty
    }

    /// Returns a new list with `value` in front of this one.
    ///
    /// O(1): the new cell shares `self` as its tail, nothing is copied.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (cons 1 '(2 3)) => (1 2 3)
    /// ```
    ///
    /// # Example
    /// ```
    /// use fp_common::{list, List};
    ///
    /// let tail = list![2, 3];
    /// assert_eq!(tail.cons(1), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn cons(&self, value: A) -> Self {
        self.clone().prepend(value)
    }

    fn prepend(self, value: A) -> Self {
        List::Node(Arc::new(Cons {
            head: value,
            tail: self,
        }))
    }

    /// Returns the first element (car).
    ///
    /// # Errors
    /// [`ListError::EmptyListAccess`] if the list is empty.
    ///
    /// # Example
    /// ```
    /// use fp_common::{list, List, ListError};
    ///
    /// assert_eq!(list![1, 2].head(), Ok(&1));
    /// assert!(matches!(
    ///     List::<i32>::empty().head(),
    ///     Err(ListError::EmptyListAccess { operation: "head" })
    /// ));
    /// ```
    pub fn head(&self) -> Result<&A, ListError> {
        match self {
            List::Empty => Err(ListError::empty("head")),
            List::Node(cell) => Ok(&cell.head),
        }
    }

    /// Returns everything after the first element (cdr).
    ///
    /// The returned list is the shared tail itself; clone it to keep an
    /// owned handle (O(1)).
    ///
    /// # Errors
    /// [`ListError::EmptyListAccess`] if the list is empty.
    pub fn tail(&self) -> Result<&List<A>, ListError> {
        match self {
            List::Empty => Err(ListError::empty("tail")),
            List::Node(cell) => Ok(&cell.tail),
        }
    }

    /// Splits a non-empty list into its head and tail.
    #[must_use]
    pub fn uncons(&self) -> Option<(&A, &List<A>)> {
        match self {
            List::Empty => None,
            List::Node(cell) => Some((cell.head(), cell.tail())),
        }
    }

    /// Checks if the list is empty.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (null? '()) => #t
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, List::Empty)
    }

    /// Returns a new list whose head is `value` and whose tail is this
    /// list's tail. `self` is left unchanged.
    ///
    /// # Errors
    /// [`ListError::EmptyListAccess`] if the list is empty.
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.set_head(9), Ok(list![9, 2, 3]));
    /// assert_eq!(xs, list![1, 2, 3]);
    /// ```
    pub fn set_head(&self, value: A) -> Result<List<A>, ListError> {
        match self {
            List::Empty => Err(ListError::empty("set_head")),
            List::Node(cell) => Ok(cell.tail.clone().prepend(value)),
        }
    }

    /// Returns a borrowing iterator over the elements, head first.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { next: self }
    }

    /// Returns the number of elements. O(n).
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (length '(1 2 3)) => 3
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.fold_left(0, |n, _| n + 1)
    }
}

// =============================================================================
// Trampolined traversals
// =============================================================================

fn drop_step<A>(list: &List<A>, n: usize) -> Trampoline<'_, &List<A>> {
    match list {
        List::Node(cell) if n > 0 => {
            let rest = &cell.tail;
            suspend(move || drop_step(rest, n - 1))
        }
        _ => done(list),
    }
}

fn drop_while_step<'a, A, P>(list: &'a List<A>, predicate: &'a mut P) -> Trampoline<'a, &'a List<A>>
where
    P: FnMut(&A) -> bool,
{
    if let List::Node(cell) = list {
        if predicate(&cell.head) {
            let rest = &cell.tail;
            return suspend(move || drop_while_step(rest, predicate));
        }
    }
    done(list)
}

fn reverse_step<'a, A: Clone>(acc: List<A>, list: &'a List<A>) -> Trampoline<'a, List<A>> {
    match list {
        List::Empty => done(acc),
        List::Node(cell) => {
            let acc = acc.prepend(cell.head.clone());
            let rest = &cell.tail;
            suspend(move || reverse_step(acc, rest))
        }
    }
}

fn fold_left_step<'a, 'f, A, B, F>(acc: B, list: &'a List<A>, f: &'f mut F) -> Trampoline<'f, B>
where
    F: FnMut(B, &'a A) -> B,
    'a: 'f,
    B: 'f,
{
    match list {
        List::Empty => done(acc),
        List::Node(cell) => {
            let acc = f(acc, &cell.head);
            let rest = &cell.tail;
            suspend(move || fold_left_step(acc, rest, f))
        }
    }
}

fn display_step<'a, A: fmt::Display>(mut acc: String, list: &'a List<A>) -> Trampoline<'a, String> {
    match list {
        List::Empty => done(acc),
        List::Node(cell) => {
            acc.push_str(&cell.head.to_string());
            acc.push_str(", ");
            let rest = &cell.tail;
            suspend(move || display_step(acc, rest))
        }
    }
}

impl<A> List<A> {
    /// Removes up to `n` elements from the front.
    ///
    /// Total: dropping more elements than the list holds yields the empty
    /// list. The result shares its cells with `self`.
    ///
    /// # Example
    /// ```
    /// use fp_common::{list, List};
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].drop(2), list![3, 4, 5]);
    /// assert_eq!(list![1, 2].drop(10), List::empty());
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn drop(&self, n: usize) -> List<A> {
        drop_step(self, n).evaluate().clone()
    }

    /// Removes elements from the front while `predicate` holds.
    ///
    /// Returns the first suffix whose head fails the predicate, or the empty
    /// list. Never fails.
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].drop_while(|x| *x < 3), list![3, 4]);
    /// ```
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> List<A>
    where
        P: FnMut(&A) -> bool,
    {
        drop_while_step(self, &mut predicate).evaluate().clone()
    }

    /// Left fold (accumulate) over the list, head to tail.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (fold-left - 0 '(1 2 3)) => -6
    /// ```
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// let trace = list![1, 2, 3].fold_left("0".to_string(), |acc, x| format!("({acc} + {x})"));
    /// assert_eq!(trace, "(((0 + 1) + 2) + 3)");
    /// ```
    pub fn fold_left<'a, B, F>(&'a self, identity: B, mut f: F) -> B
    where
        F: FnMut(B, &'a A) -> B,
    {
        fold_left_step(identity, self, &mut f).evaluate()
    }

    /// Right fold over the list: `f(x1, f(x2, ... f(xn, identity)))`.
    ///
    /// Computed without right recursion: the list is first reversed (into a
    /// list of borrowed elements) and then left-folded with the arguments of
    /// `f` swapped. That costs one O(n) allocation and keeps the stack flat.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (fold-right cons '() '(1 2 3)) => (1 2 3)
    /// ```
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// let nil = "nil".to_string();
    /// let result = list![1, 2, 3].fold_right(nil, |x, acc| format!("({x} . {acc})"));
    /// assert_eq!(result, "(1 . (2 . (3 . nil)))");
    /// ```
    pub fn fold_right<'a, B, F>(&'a self, identity: B, mut f: F) -> B
    where
        F: FnMut(&'a A, B) -> B,
    {
        let reversed: List<&'a A> = self.fold_left(List::empty(), |acc, x| acc.prepend(x));
        reversed.fold_left(identity, |acc, x| f(*x, acc))
    }

    /// Applies `f` to every element, preserving order and length.
    ///
    /// Built on [`fold_right`](List::fold_right), so `f` sees the elements
    /// from last to first.
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// assert_eq!(list![1, 2, 3].map(|x| x * x), list![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut f: F) -> List<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fold_right(List::empty(), |x, acc| acc.prepend(f(x)))
    }

    /// Renders the elements in order, bracketed and terminated by the `NIL`
    /// marker: `[1, 2, 3, NIL]`. Purely diagnostic.
    pub fn to_display_string(&self) -> String
    where
        A: fmt::Display,
    {
        format!("[{}NIL]", display_step(String::new(), self).evaluate())
    }
}

impl<A: Clone> List<A> {
    /// Reverses the list into freshly allocated cells.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (reverse '(1 2 3)) => (3 2 1)
    /// ```
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// assert_eq!(list![1, 2, 3].reverse(), list![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> List<A> {
        reverse_step(List::empty(), self).evaluate()
    }

    /// Returns the list without its last element.
    ///
    /// # Errors
    /// [`ListError::EmptyListAccess`] if the list is empty.
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// assert_eq!(list![1, 2, 3].init(), Ok(list![1, 2]));
    /// ```
    pub fn init(&self) -> Result<List<A>, ListError> {
        if self.is_empty() {
            return Err(ListError::empty("init"));
        }
        Ok(self.reverse().tail()?.reverse())
    }

    /// Keeps the elements for which `predicate` holds, in their original
    /// relative order.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (filter even? '(1 2 3 4 5)) => (2 4)
    /// ```
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].filter(|x| x % 2 == 0), list![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> List<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_right(List::empty(), |x, acc| {
            if predicate(x) {
                acc.prepend(x.clone())
            } else {
                acc
            }
        })
    }

    /// Appends `other` after the elements of `self`.
    ///
    /// Only `self` is copied; the result shares every cell of `other`.
    ///
    /// # Scheme equivalent
    /// ```scheme
    /// (append '(1 2) '(3 4)) => (1 2 3 4)
    /// ```
    #[must_use]
    pub fn concat(&self, other: &List<A>) -> List<A> {
        self.fold_right(other.clone(), |x, acc| acc.prepend(x.clone()))
    }
}

impl<A: Clone> List<List<A>> {
    /// Concatenates a list of lists, keeping both outer and inner order.
    ///
    /// # Example
    /// ```
    /// use fp_common::{list, List};
    ///
    /// let nested: List<List<i32>> = list![list![1, 2], List::empty(), list![3]];
    /// assert_eq!(nested.flatten(), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> List<A> {
        self.fold_right(List::empty(), |inner, acc| inner.concat(&acc))
    }
}

// =============================================================================
// Iteration and standard traits
// =============================================================================

/// Borrowing iterator returned by [`List::iter`].
pub struct Iter<'a, A> {
    next: &'a List<A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.next.uncons()?;
        self.next = tail;
        Some(head)
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let items: Vec<A> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |acc, x| acc.prepend(x))
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
