//! Resizable array container.
//!
//! This module provides [`Array`], an index-addressable, growable sequence
//! that every extension in this crate builds on:
//!
//! - an `ordered` flag: ordered arrays remove by shifting the tail, unordered
//!   arrays remove by moving the last element into the hole
//! - value search and removal with a selectable [`Equality`] mode
//! - an explicit growth policy: a full array grows to `max(8, size * 7 / 4)`
//! - primitive specializations such as [`IntArray`] and [`FloatArray`]
//!
//! # Examples
//!
//! ```rust
//! use arraykit::array::Array;
//!
//! let mut array = Array::with_options(false, 4);
//! array.add("a");
//! array.add("b");
//! array.add("c");
//!
//! // Unordered removal moves the last element into the hole
//! array.remove_index(0);
//! assert_eq!(array.as_slice(), &["c", "b"]);
//! ```

mod equality;
mod primitive;

pub use equality::{Equality, Identity};
pub use primitive::*;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Range};

use crate::error::ArrayError;

/// Capacity of an array created with [`Array::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Smallest capacity a full array grows to.
pub const MINIMUM_GROWTH: usize = 8;

// =============================================================================
// Array Definition
// =============================================================================

/// A resizable, index-addressable array.
///
/// # Time Complexity
///
/// | Operation              | Complexity          |
/// |------------------------|---------------------|
/// | `get` / `set`          | O(1)                |
/// | `add`                  | O(1) amortized      |
/// | `remove_index`         | O(n) ordered, O(1) unordered |
/// | `remove_value`         | O(n)                |
/// | `contains`             | O(n)                |
///
/// # Examples
///
/// ```rust
/// use arraykit::array::Array;
///
/// let mut array = Array::new();
/// array.add(1);
/// array.add(2);
/// assert_eq!(array.size(), 2);
/// assert_eq!(array.capacity(), 16);
/// assert!(array.is_ordered());
/// ```
#[derive(Clone)]
pub struct Array<T> {
    items: Vec<T>,
    ordered: bool,
}

impl<T> Array<T> {
    /// Creates an empty ordered array with [`DEFAULT_CAPACITY`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(true, DEFAULT_CAPACITY)
    }

    /// Creates an empty ordered array with exactly `capacity` slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::array::Array;
    ///
    /// let array: Array<String> = Array::with_capacity(32);
    /// assert_eq!(array.capacity(), 32);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(true, capacity)
    }

    /// Creates an empty array with the given ordering and capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::array::Array;
    ///
    /// let array: Array<i32> = Array::with_options(false, 128);
    /// assert!(!array.is_ordered());
    /// assert_eq!(array.capacity(), 128);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_options(ordered: bool, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            ordered,
        }
    }

    /// Wraps an existing vector as an ordered array without copying.
    #[inline]
    #[must_use]
    pub const fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            ordered: true,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements. Alias of [`Array::size`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the length of the backing storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns `true` if removal preserves the order of the remaining elements.
    #[inline]
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Changes how subsequent removals compact the array.
    #[inline]
    pub const fn set_ordered(&mut self, ordered: bool) {
        self.ordered = ordered;
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Views the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Views the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Appends an element, growing the backing storage if it is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::array::Array;
    ///
    /// let mut array = Array::with_capacity(0);
    /// array.add('x');
    /// assert_eq!(array.capacity(), 8);
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) {
        self.grow_if_full();
        self.items.push(element);
    }

    /// Inserts an element at `index`, shifting later elements to the right.
    ///
    /// In an unordered array the element previously at `index` moves to the end instead.
    ///
    /// # Panics
    ///
    /// Panics if `index > size`.
    pub fn insert(&mut self, index: usize, element: T) {
        if let Err(error) = self.try_insert(index, element) {
            panic!("{error}");
        }
    }

    /// Inserts an element at `index`, or reports an error if `index > size`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] if `index > size`.
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        let size = self.items.len();
        if index > size {
            return Err(ArrayError::IndexOutOfBounds { index, size });
        }
        self.grow_if_full();
        if self.ordered {
            self.items.insert(index, element);
        } else {
            self.items.push(element);
            self.items.swap(index, size);
        }
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn set(&mut self, index: usize, element: T) -> T {
        match self.try_set(index, element) {
            Ok(previous) => previous,
            Err(error) => panic!("{error}"),
        }
    }

    /// Replaces the element at `index`, or reports an error if out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] if `index >= size`.
    pub fn try_set(&mut self, index: usize, element: T) -> Result<T, ArrayError> {
        let size = self.items.len();
        self.items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, element))
            .ok_or(ArrayError::IndexOutOfBounds { index, size })
    }

    /// Swaps the elements at `first` and `second`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, first: usize, second: usize) {
        if let Err(error) = self.try_swap(first, second) {
            panic!("{error}");
        }
    }

    /// Swaps two elements, or reports the first out-of-bounds index.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] if either index is `>= size`.
    pub fn try_swap(&mut self, first: usize, second: usize) -> Result<(), ArrayError> {
        let size = self.items.len();
        if let Some(&index) = [first, second].iter().find(|&&index| index >= size) {
            return Err(ArrayError::IndexOutOfBounds { index, size });
        }
        self.items.swap(first, second);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// An ordered array shifts later elements left; an unordered array moves
    /// its last element into the hole.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn remove_index(&mut self, index: usize) -> T {
        match self.try_remove_index(index) {
            Ok(removed) => removed,
            Err(error) => panic!("{error}"),
        }
    }

    /// Removes the element at `index`, or reports an error if out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] if `index >= size`.
    pub fn try_remove_index(&mut self, index: usize) -> Result<T, ArrayError> {
        let size = self.items.len();
        if index >= size {
            return Err(ArrayError::IndexOutOfBounds { index, size });
        }
        Ok(if self.ordered {
            self.items.remove(index)
        } else {
            self.items.swap_remove(index)
        })
    }

    /// Removes the elements in `range`, preserving the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or ends past `size`.
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.items.drain(range);
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes every element, keeping the backing storage.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drops elements past `new_size`. Has no effect if the array is already smaller.
    #[inline]
    pub fn truncate(&mut self, new_size: usize) {
        self.items.truncate(new_size);
    }

    /// Guarantees room for `additional` more elements, allocating exactly that much.
    #[inline]
    pub fn ensure_capacity(&mut self, additional: usize) {
        self.items.reserve_exact(additional);
    }

    /// Makes room for `additional` more elements, following the growth policy.
    ///
    /// Does nothing while the elements still fit. Otherwise the capacity becomes
    /// `max(8, size + additional, size * 7 / 4)`, so repeated small bulk
    /// appends reallocate geometrically rather than once per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::array::Array;
    ///
    /// let mut array: Array<i32> = Array::with_capacity(0);
    /// array.reserve(1);
    /// assert_eq!(array.capacity(), 8);
    ///
    /// array.extend([0; 8]);
    /// array.reserve(1);
    /// assert_eq!(array.capacity(), 14);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let size = self.items.len();
        let required = size.saturating_add(additional);
        if required <= self.items.capacity() {
            return;
        }
        let target = MINIMUM_GROWTH.max(required).max(size * 7 / 4);
        self.items.reserve_exact(target - size);
        trace!(
            size,
            capacity = self.items.capacity(),
            "array storage grown"
        );
    }

    /// Shrinks the backing storage to the current size.
    #[inline]
    pub fn shrink(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Consumes the array, returning its elements as a vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[inline]
    fn grow_if_full(&mut self) {
        self.reserve(1);
    }
}

impl<T: Clone> Array<T> {
    /// Creates an ordered array holding a copy of `slice`, sized to fit exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::array::Array;
    ///
    /// let array = Array::from_slice(&["1", "2", "3"]);
    /// assert_eq!(array.size(), 3);
    /// assert_eq!(array[1], "2");
    /// ```
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from_vec(slice.to_vec())
    }

    /// Copies the elements into a new vector.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

// =============================================================================
// Equality-Mode Search
// =============================================================================

impl<T: PartialEq> Array<T> {
    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    #[inline]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().rposition(|element| element == value)
    }

    /// Returns `true` if some element is equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`, returning whether one was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// let mut array = array!["a", "b", "a"];
    /// assert!(array.remove_value(&"a"));
    /// assert_eq!(array, ["b", "a"]);
    /// assert!(!array.remove_value(&"z"));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> bool {
        self.index_of(value)
            .map(|index| self.remove_index(index))
            .is_some()
    }
}

impl<T: PartialEq + Identity> Array<T> {
    /// Returns the index of the first element matching `value` under `equality`.
    #[inline]
    pub fn index_of_by(&self, value: &T, equality: Equality) -> Option<usize> {
        self.items
            .iter()
            .position(|element| equality.matches(element, value))
    }

    /// Returns `true` if some element matches `value` under `equality`.
    #[inline]
    pub fn contains_by(&self, value: &T, equality: Equality) -> bool {
        self.index_of_by(value, equality).is_some()
    }

    /// Removes the first element matching `value` under `equality`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use arraykit::prelude::*;
    ///
    /// let kept = Rc::new(1);
    /// let lookalike = Rc::new(1);
    /// let mut array = array![Rc::clone(&kept)];
    ///
    /// assert!(!array.remove_value_by(&lookalike, Equality::Identity));
    /// assert!(array.remove_value_by(&lookalike, Equality::Structural));
    /// assert!(array.is_empty());
    /// ```
    pub fn remove_value_by(&mut self, value: &T, equality: Equality) -> bool {
        self.index_of_by(value, equality)
            .map(|index| self.remove_index(index))
            .is_some()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self {
        array.items
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Array<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// Arrays are equal when they hold equal elements in the same order.
///
/// The `ordered` flag and the capacity do not take part in the comparison.
impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for Array<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Array<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Array<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.items {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(Array<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Array<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
