//! Indexed access with fallback.
//!
//! [`IndexedAccess`] looks elements up by a signed index and substitutes a
//! caller-supplied default instead of panicking. Out-of-range indices (negative
//! or past the end) and, for containers of `Option`, stored `None` elements
//! take the same fallback path: the caller never has to tell them apart.
//!
//! # Examples
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let array = array![Some("0"), None, Some("2")];
//!
//! assert_eq!(array.get_present_or(0, "3"), "0");
//! assert_eq!(array.get_present_or(1, "3"), "3");
//! assert_eq!(array.get_present_or(2, "3"), "2");
//! assert_eq!(array.get_present_or(3, "3"), "3");
//! ```

use crate::container::Container;

/// Bounds-checked element retrieval that falls back to a default.
///
/// The default is only returned, never stored in the container.
pub trait IndexedAccess: Container {
    /// Returns a copy of the element at `index`, or `default` if `index` is
    /// outside `0..size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let numbers = array![10, 20];
    /// assert_eq!(numbers.get_or(1, 0), 20);
    /// assert_eq!(numbers.get_or(-1, 0), 0);
    /// assert_eq!(numbers.get_or(2, 0), 0);
    /// ```
    #[inline]
    fn get_or(&self, index: isize, default: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        element_at(self.as_slice(), index)
            .cloned()
            .unwrap_or(default)
    }

    /// Returns the value stored at `index`, or `default` if `index` is outside
    /// `0..size` or the stored element is `None`.
    #[inline]
    fn get_present_or<T>(&self, index: isize, default: T) -> T
    where
        Self: Container<Item = Option<T>>,
        T: Clone,
    {
        element_at(self.as_slice(), index)
            .and_then(Option::as_ref)
            .cloned()
            .unwrap_or(default)
    }
}

impl<C: Container> IndexedAccess for C {}

fn element_at<T>(elements: &[T], index: isize) -> Option<&T> {
    usize::try_from(index)
        .ok()
        .and_then(|index| elements.get(index))
}
