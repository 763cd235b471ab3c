//! Bulk and chainable in-place mutation.
//!
//! [`BulkMutation`] appends and removes elements from foreign sources: any
//! iterable, slice or native array. Every operation mutates the receiver in
//! place; the chainable forms (`plus`, `plus_all`, `minus`, `minus_all`)
//! return the receiver itself, so calls compose left to right:
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let mut array = array!["1", "2", "3", "4"];
//! array.plus("5").minus("2").plus_all(array!["7"]).minus_all(array!["4", "6"]);
//! assert_eq!(array, array!["1", "3", "5", "7"]);
//! ```
//!
//! [`Array`] additionally supports the `+`/`-` operators for single elements
//! on a mutable reference, which evaluate to that same reference:
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let mut array = array!["1", "2", "3"];
//! let _ = &mut array + "4" - "1";
//! assert_eq!(array, ["2", "3", "4"]);
//! ```
//!
//! # Removal Semantics
//!
//! Removal always uses structural equality (`PartialEq`); identity matching is
//! only available through [`Array::remove_value_by`]. Bulk removal is
//! one-for-one: each element of the source removes at most one matching
//! element of the container, so a value repeated `n` times in the source
//! removes up to `n` occurrences. It is a multiset difference, not a set
//! difference.

use std::borrow::Borrow;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::array::Array;
use crate::container::Container;

/// In-place bulk mutation with chainable two-operand forms.
pub trait BulkMutation: Container {
    /// Appends every element of `source`, in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut array: Array<String> = Array::new();
    /// array.add_all(vec!["1".to_string(), "2".to_string()]);
    /// assert_eq!(array.size(), 2);
    /// ```
    fn add_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let source = source.into_iter();
        self.reserve(source.size_hint().0);
        for element in source {
            Container::add(self, element);
        }
        trace!(size = self.size(), "added all elements from source");
    }

    /// Removes the first element equal to `value`, returning whether one was found.
    fn remove_equal(&mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        let position = self
            .as_slice()
            .iter()
            .position(|element| element == value);
        position.map(|index| self.remove_index(index)).is_some()
    }

    /// Removes one equal element per element of `source`, returning how many were removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut array = array![1, 1, 1, 2];
    /// assert_eq!(array.remove_all([1, 1, 3]), 2);
    /// assert_eq!(array, [1, 2]);
    /// ```
    fn remove_all<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Item>,
        Self::Item: PartialEq,
    {
        let mut removed = 0_usize;
        for value in source {
            if self.remove_equal(value.borrow()) {
                removed += 1;
            }
        }
        trace!(removed, size = self.size(), "removed all elements from source");
        removed
    }

    /// Appends `element` and returns the receiver.
    #[inline]
    fn plus(&mut self, element: Self::Item) -> &mut Self {
        Container::add(self, element);
        self
    }

    /// Appends every element of `source` and returns the receiver.
    #[inline]
    fn plus_all<I>(&mut self, source: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.add_all(source);
        self
    }

    /// Removes the first element equal to `value` and returns the receiver.
    #[inline]
    fn minus<Q>(&mut self, value: Q) -> &mut Self
    where
        Q: Borrow<Self::Item>,
        Self::Item: PartialEq,
    {
        self.remove_equal(value.borrow());
        self
    }

    /// Removes one equal element per element of `source` and returns the receiver.
    #[inline]
    fn minus_all<I>(&mut self, source: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Item>,
        Self::Item: PartialEq,
    {
        self.remove_all(source);
        self
    }
}

impl<C: Container> BulkMutation for C {}

// =============================================================================
// Operators
// =============================================================================

impl<'a, T> Add<T> for &'a mut Array<T> {
    type Output = &'a mut Array<T>;

    #[inline]
    fn add(self, element: T) -> Self::Output {
        Array::add(self, element);
        self
    }
}

impl<'a, T: PartialEq> Sub<T> for &'a mut Array<T> {
    type Output = &'a mut Array<T>;

    #[inline]
    fn sub(self, value: T) -> Self::Output {
        self.remove_value(&value);
        self
    }
}

impl<T> AddAssign<T> for Array<T> {
    #[inline]
    fn add_assign(&mut self, element: T) {
        Self::add(self, element);
    }
}

impl<T: PartialEq> SubAssign<T> for Array<T> {
    #[inline]
    fn sub_assign(&mut self, value: T) {
        self.remove_value(&value);
    }
}
