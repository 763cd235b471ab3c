//! Traversal with removal.
//!
//! [`Traverse::iterate`] hands the callback each element together with an
//! [`IterationHandle`]; calling [`IterationHandle::remove`] deletes that
//! element before the next one is produced. The traversal is driven by a
//! [`Cursor`], a single mutating iterator that compensates for removals, so
//! every element present at the start is visited exactly once and removed
//! elements are never visited again.
//!
//! In an unordered [`Array`](crate::array::Array) a removal moves the last
//! element into the hole; the cursor visits that element next.
//!
//! # Examples
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let mut array = array!["1", "2", "3"];
//! array.iterate(|value, handle| {
//!     if *value == "2" {
//!         handle.remove();
//!     }
//! });
//! assert_eq!(array, ["1", "3"]);
//! ```

use crate::container::Container;

/// A per-element handle that can delete the element just produced.
///
/// A handle is created for a single callback invocation. Calling
/// [`remove`](Self::remove) more than once is the same as calling it once.
#[derive(Debug)]
pub struct IterationHandle {
    removed: bool,
}

impl IterationHandle {
    const fn new() -> Self {
        Self { removed: false }
    }

    /// Marks the current element for removal.
    #[inline]
    pub const fn remove(&mut self) {
        self.removed = true;
    }

    /// Returns `true` if [`remove`](Self::remove) was called.
    #[inline]
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.removed
    }
}

static_assertions::assert_not_impl_any!(IterationHandle: Default, Clone);

/// A mutating iterator over a container that can remove the element it last produced.
///
/// `Cursor` lends its elements, so it is advanced explicitly rather than
/// through [`Iterator`].
///
/// # Examples
///
/// ```rust
/// use arraykit::prelude::*;
///
/// let mut array = array![1, 2, 3, 4];
/// let mut cursor = Cursor::new(&mut array);
/// while let Some(&value) = cursor.advance() {
///     if value % 2 == 0 {
///         cursor.remove();
///     }
/// }
/// assert_eq!(array, [1, 3]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, C: Container> {
    container: &'a mut C,
    next: usize,
    current: Option<usize>,
}

impl<'a, C: Container> Cursor<'a, C> {
    /// Creates a cursor positioned before the first element.
    #[inline]
    pub const fn new(container: &'a mut C) -> Self {
        Self {
            container,
            next: 0,
            current: None,
        }
    }

    /// Produces the next element, or `None` once the traversal is exhausted.
    #[inline]
    pub fn advance(&mut self) -> Option<&C::Item> {
        let element = self.container.as_slice().get(self.next)?;
        self.current = Some(self.next);
        self.next += 1;
        Some(element)
    }

    /// Removes the element most recently produced by [`advance`](Self::advance).
    ///
    /// Returns `None` if no element has been produced since the last removal.
    pub fn remove(&mut self) -> Option<C::Item> {
        let index = self.current.take()?;
        self.next = index;
        Some(self.container.remove_index(index))
    }
}

/// Callback-driven traversal that may remove elements along the way.
pub trait Traverse: Container + Sized {
    /// Visits every element in iteration order, letting `callback` remove the
    /// current element through the handle.
    fn iterate<F>(&mut self, mut callback: F)
    where
        F: FnMut(&Self::Item, &mut IterationHandle),
    {
        let mut cursor = Cursor::new(self);
        while let Some(element) = cursor.advance() {
            let mut handle = IterationHandle::new();
            callback(element, &mut handle);
            if handle.is_removed() {
                cursor.remove();
            }
        }
    }

    /// Removes every element matching `predicate`, returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut array = array![1, 2, 3, 4, 5];
    /// assert_eq!(array.remove_where(|value| value % 2 == 0), 2);
    /// assert_eq!(array, [1, 3, 5]);
    /// ```
    fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut removed = 0_usize;
        self.iterate(|element, handle| {
            if predicate(element) {
                handle.remove();
                removed += 1;
            }
        });
        trace!(removed, "removed matching elements");
        removed
    }

    /// Keeps only the elements matching `predicate`, returning how many were removed.
    fn retain_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.remove_where(|element| !predicate(element))
    }

    /// Moves every element matching `predicate` to the end of `destination`,
    /// returning how many were moved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut source = array!["keep", "move", "keep"];
    /// let mut destination = Vec::new();
    /// assert_eq!(source.transfer(&mut destination, |value| *value == "move"), 1);
    /// assert_eq!(source, ["keep", "keep"]);
    /// assert_eq!(destination, vec!["move"]);
    /// ```
    fn transfer<D, P>(&mut self, destination: &mut D, mut predicate: P) -> usize
    where
        D: Container<Item = Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut moved = 0_usize;
        let mut cursor = Cursor::new(self);
        while let Some(element) = cursor.advance() {
            if predicate(element)
                && let Some(element) = cursor.remove()
            {
                destination.add(element);
                moved += 1;
            }
        }
        trace!(moved, "transferred matching elements");
        moved
    }
}

impl<C: Container> Traverse for C {}
