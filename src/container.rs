//! The container capability shared by every extension in this crate.
//!
//! [`Container`] describes the minimal set of operations the convenience layer
//! consumes from a resizable sequence: size, capacity, slice access, append,
//! reservation and index-based removal. It also emulates a higher-kinded type
//! through the generic associated type [`Container::WithType`], so that
//! transformations such as `map` can build a container of the same family
//! holding a different element type.
//!
//! Implementations are provided for [`Array`] and [`Vec`].
//!
//! # Examples
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! fn duplicate_last<C>(container: &mut C)
//! where
//!     C: Container,
//!     C::Item: Clone,
//! {
//!     if let Some(last) = container.as_slice().last().cloned() {
//!         container.add(last);
//!     }
//! }
//!
//! let mut array = array![1, 2];
//! duplicate_last(&mut array);
//! assert_eq!(array, [1, 2, 2]);
//!
//! let mut vector = vec![3];
//! duplicate_last(&mut vector);
//! assert_eq!(vector, vec![3, 3]);
//! ```

use crate::array::Array;

/// A resizable, index-addressable sequence that this crate can extend.
pub trait Container {
    /// The element type.
    type Item;

    /// The same container family holding elements of type `B`.
    type WithType<B>: Container<Item = B>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the length of the backing storage.
    fn capacity(&self) -> usize;

    /// Views the elements as a slice, in iteration order.
    fn as_slice(&self) -> &[Self::Item];

    /// Views the elements as a mutable slice, in iteration order.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Appends an element at the end.
    fn add(&mut self, element: Self::Item);

    /// Reserves room for at least `additional` more elements, following the
    /// container's own growth policy.
    fn reserve(&mut self, additional: usize);

    /// Removes and returns the element at `index`.
    ///
    /// Whether later elements shift or the last element fills the hole is up
    /// to the container. Callers must pass `index < size`.
    fn remove_index(&mut self, index: usize) -> Self::Item;

    /// Creates an empty container of the same family with room for `capacity`
    /// elements, carrying over any configuration such as ordering.
    fn empty_like<B>(&self, capacity: usize) -> Self::WithType<B>;

    /// Returns `true` if the container has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if the container has at least one element.
    #[inline]
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the index of the last element, or `-1` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arraykit::prelude::*;
    ///
    /// assert_eq!(array!["1", "2", "3"].last_index(), 2);
    /// assert_eq!(Array::<&str>::new().last_index(), -1);
    /// ```
    #[inline]
    fn last_index(&self) -> isize {
        isize::try_from(self.size()).map_or(isize::MAX, |size| size - 1)
    }
}

impl<T> Container for Array<T> {
    type Item = T;
    type WithType<B> = Array<B>;

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        Self::as_slice(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Self::as_mut_slice(self)
    }

    #[inline]
    fn add(&mut self, element: T) {
        Self::add(self, element);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    #[inline]
    fn remove_index(&mut self, index: usize) -> T {
        Self::remove_index(self, index)
    }

    #[inline]
    fn empty_like<B>(&self, capacity: usize) -> Array<B> {
        Array::with_options(self.is_ordered(), capacity)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;
    type WithType<B> = Vec<B>;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        Self::as_slice(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Self::as_mut_slice(self)
    }

    #[inline]
    fn add(&mut self, element: T) {
        self.push(element);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    #[inline]
    fn remove_index(&mut self, index: usize) -> T {
        self.remove(index)
    }

    #[inline]
    fn empty_like<B>(&self, capacity: usize) -> Vec<B> {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}
