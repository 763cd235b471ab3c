//! In-place sort adapters.
//!
//! Key-derived sorts recompute the key for every comparison and cache
//! nothing, so `key_of` must be pure. All sorts are stable.
//!
//! Floating-point elements and keys are not `Ord`. They sort through the
//! `*_total` adapters instead, which order them by [`TotalOrder`]: IEEE 754
//! `totalOrder`, where `-0.0 < 0.0` and `NaN` sorts after every number.
//!
//! # Examples
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let mut words = array!["Twenty-one", "Eleven", "One"];
//! words.sort_by_key(|word| word.len());
//! assert_eq!(words, ["One", "Eleven", "Twenty-one"]);
//!
//! words.sort_by_key_descending(|word| word.len());
//! assert_eq!(words, ["Twenty-one", "Eleven", "One"]);
//!
//! let mut weights = to_float_array(&[0.5, 2.0, 1.25]);
//! weights.sort_descending_total();
//! assert_eq!(weights, [2.0, 1.25, 0.5]);
//! ```

use std::cmp::Ordering;

use crate::container::Container;

/// A total order for types whose natural comparison is only partial.
pub trait TotalOrder {
    /// Compares `self` and `other` under the total order.
    fn total_order(&self, other: &Self) -> Ordering;
}

impl TotalOrder for f32 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalOrder for f64 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Sorting operations applied to the container in place.
pub trait SortAdapters: Container {
    /// Sorts the elements by their natural order, reversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut numbers = array![1, 2, 3];
    /// numbers.sort_descending();
    /// assert_eq!(numbers, [3, 2, 1]);
    /// ```
    #[inline]
    fn sort_descending(&mut self)
    where
        Self::Item: Ord,
    {
        self.as_mut_slice().sort_by(|left, right| right.cmp(left));
    }

    /// Sorts the elements by ascending order of the key derived by `key_of`.
    #[inline]
    fn sort_by_key<K, F>(&mut self, mut key_of: F)
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.as_mut_slice()
            .sort_by(|left, right| key_of(left).cmp(&key_of(right)));
    }

    /// Sorts the elements by descending order of the key derived by `key_of`.
    #[inline]
    fn sort_by_key_descending<K, F>(&mut self, mut key_of: F)
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.as_mut_slice()
            .sort_by(|left, right| key_of(right).cmp(&key_of(left)));
    }

    /// Sorts the elements by the reverse of `compare`.
    #[inline]
    fn sort_descending_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.as_mut_slice()
            .sort_by(|left, right| compare(right, left));
    }

    /// Sorts the elements by their [`TotalOrder`], reversed.
    #[inline]
    fn sort_descending_total(&mut self)
    where
        Self::Item: TotalOrder,
    {
        self.sort_descending_by(<Self::Item as TotalOrder>::total_order);
    }

    /// Sorts the elements by ascending [`TotalOrder`] of the key derived by `key_of`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut points = array![(3.5_f32, 'a'), (-1.0, 'b'), (0.0, 'c')];
    /// points.sort_by_total_key(|point| point.0);
    /// assert_eq!(points, [(-1.0, 'b'), (0.0, 'c'), (3.5, 'a')]);
    /// ```
    #[inline]
    fn sort_by_total_key<K, F>(&mut self, mut key_of: F)
    where
        K: TotalOrder,
        F: FnMut(&Self::Item) -> K,
    {
        self.as_mut_slice()
            .sort_by(|left, right| key_of(left).total_order(&key_of(right)));
    }

    /// Sorts the elements by descending [`TotalOrder`] of the key derived by `key_of`.
    #[inline]
    fn sort_by_total_key_descending<K, F>(&mut self, mut key_of: F)
    where
        K: TotalOrder,
        F: FnMut(&Self::Item) -> K,
    {
        self.as_mut_slice()
            .sort_by(|left, right| key_of(right).total_order(&key_of(left)));
    }
}

impl<C: Container> SortAdapters for C {}
