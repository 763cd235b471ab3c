//! Null-tolerant queries.
//!
//! Every query in this module accepts an absent container (`None`) and treats
//! it as empty, so callers holding an optional container never need to branch
//! before asking for its size.
//!
//! | Query          | Absent | Present                |
//! |----------------|--------|------------------------|
//! | `size`         | `0`    | element count          |
//! | `is_empty`     | `true` | `size == 0`            |
//! | `is_not_empty` | `false`| `size > 0`             |
//! | `last_index`   | `-1`   | `size - 1`             |
//!
//! The queries are available as free functions and, through
//! [`NullableQuery`], as methods on `Option<&C>`.
//!
//! # Examples
//!
//! ```rust
//! use arraykit::prelude::*;
//! use arraykit::query;
//!
//! let absent: Option<&IntArray> = None;
//! assert_eq!(query::size(absent), 0);
//! assert!(absent.is_empty());
//! assert_eq!(absent.last_index(), -1);
//!
//! let present = to_int_array(&[1, 2, 3]);
//! assert_eq!(Some(&present).size(), 3);
//! assert_eq!(query::last_index(Some(&present)), 2);
//! ```

use crate::container::Container;

/// Returns the number of elements, or `0` for an absent container.
#[inline]
pub fn size<C: Container>(container: Option<&C>) -> usize {
    container.map_or(0, Container::size)
}

/// Returns `true` if the container is absent or has no elements.
#[inline]
pub fn is_empty<C: Container>(container: Option<&C>) -> bool {
    container.is_none_or(Container::is_empty)
}

/// Returns `true` if the container is present and has at least one element.
#[inline]
pub fn is_not_empty<C: Container>(container: Option<&C>) -> bool {
    !is_empty(container)
}

/// Returns the index of the last element, or `-1` if the container is absent or empty.
#[inline]
pub fn last_index<C: Container>(container: Option<&C>) -> isize {
    container.map_or(-1, Container::last_index)
}

/// Method-style access to the null-tolerant queries on an optional container.
pub trait NullableQuery {
    /// Returns the number of elements, or `0` when absent.
    fn size(&self) -> usize;

    /// Returns `true` when absent or empty.
    fn is_empty(&self) -> bool;

    /// Returns `true` when present and non-empty.
    fn is_not_empty(&self) -> bool;

    /// Returns the index of the last element, or `-1` when absent or empty.
    fn last_index(&self) -> isize;
}

impl<C: Container> NullableQuery for Option<&C> {
    #[inline]
    fn size(&self) -> usize {
        size(*self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        is_empty(*self)
    }

    #[inline]
    fn is_not_empty(&self) -> bool {
        is_not_empty(*self)
    }

    #[inline]
    fn last_index(&self) -> isize {
        last_index(*self)
    }
}
