//! Transformations into fresh containers.
//!
//! [`Transform`] builds a new container of the same family as the source
//! (through [`Container::WithType`]) and never mutates the source. An
//! [`Array`](crate::array::Array) result inherits the source's `ordered` flag.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! container.map(|x| x.clone()) == container
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! container.map(f).map(g) == container.map(|x| g(&f(x)))
//! ```
//!
//! ## Flat Map Law
//!
//! ```text
//! container.flat_map(f) == container.map(f).flatten()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use arraykit::prelude::*;
//!
//! let numbers = array![1_usize, 2, 3];
//! assert_eq!(numbers.map(|n| n * 2), [2, 4, 6]);
//! assert_eq!(numbers.filter(|n| n % 2 == 1), [1, 3]);
//! assert_eq!(numbers.flat_map(|&n| vec![n; n]), [1, 2, 2, 3, 3, 3]);
//!
//! let nested = array![LinkedList::from([1]), LinkedList::new(), LinkedList::from([2, 3])];
//! assert_eq!(nested.flatten(), [1, 2, 3]);
//! ```

use crate::container::Container;

/// Higher-order transformations producing new containers.
///
/// Results are built with [`Container::empty_like`], so an
/// [`Array`](crate::array::Array) result keeps the source's `ordered` flag: a
/// transform of an unordered array is itself unordered. Call
/// [`Array::set_ordered`](crate::array::Array::set_ordered) on the result to
/// change it.
///
/// # Examples
///
/// ```rust
/// use arraykit::prelude::*;
///
/// let mut source: Array<i32> = Array::with_options(false, 2);
/// source.add_all([1, 2]);
///
/// let mut doubled = source.map(|value| value * 2);
/// assert!(!doubled.is_ordered());
/// doubled.set_ordered(true);
/// assert!(doubled.is_ordered());
/// ```
pub trait Transform: Container {
    /// Applies `function` to every element, collecting the results in order.
    ///
    /// The result is pre-sized to the source's size.
    fn map<R, F>(&self, mut function: F) -> Self::WithType<R>
    where
        F: FnMut(&Self::Item) -> R,
    {
        let mut destination = self.empty_like(self.size());
        for element in self.as_slice() {
            destination.add(function(element));
        }
        destination
    }

    /// Collects, in order, copies of the elements matching `predicate`.
    fn filter<P>(&self, mut predicate: P) -> Self::WithType<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        let mut destination = self.empty_like(self.size());
        for element in self.as_slice() {
            if predicate(element) {
                destination.add(element.clone());
            }
        }
        destination
    }

    /// Concatenates, in order, every element of every nested iterable.
    ///
    /// The nested iterables can be any type iterable by reference, such as
    /// `Vec`, `LinkedList`, `HashSet` or [`Array`](crate::array::Array).
    fn flatten<'a, U>(&'a self) -> Self::WithType<U>
    where
        Self::Item: 'a,
        &'a Self::Item: IntoIterator<Item = &'a U>,
        U: Clone + 'a,
    {
        let mut destination = self.empty_like(self.size());
        for nested in self.as_slice() {
            for element in nested {
                destination.add(element.clone());
            }
        }
        destination
    }

    /// Maps every element to an iterable and concatenates the results in order.
    fn flat_map<R, I, F>(&self, mut function: F) -> Self::WithType<R>
    where
        F: FnMut(&Self::Item) -> I,
        I: IntoIterator<Item = R>,
    {
        let mut destination = self.empty_like(self.size());
        for element in self.as_slice() {
            for mapped in function(element) {
                destination.add(mapped);
            }
        }
        destination
    }
}

impl<C: Container> Transform for C {}
