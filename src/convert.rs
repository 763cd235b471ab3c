//! Conversions between containers and other collection families.
//!
//! - [`ToSet`]: container to hash set, collapsing duplicates
//! - [`ToArray`]: any iterable (lists, iterators, native arrays) to [`Array`]
//! - `Array::from_slice`, `From<[T; N]>`, `From<&[T]>`, `From<Vec<T>>` and
//!   [`Array::to_vec`] for native arrays and vectors
//! - `to_int_array` and its siblings in [`crate::array`] for primitive slices
//!
//! No conversion mutates its source.
//!
//! # Fast Hashing
//!
//! [`FastHashSet`] selects its hasher through cargo features:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash` (without `fxhash`): `ahash::RandomState`
//! - neither: the standard library's `RandomState`
//!
//! # Examples
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let array = vec!["1", "2", "3"].to_array();
//! assert_eq!(array, ["1", "2", "3"]);
//!
//! let set = array!["1", "2", "2"].to_set();
//! assert_eq!(set.len(), 2);
//! assert!(set.contains("1"));
//! ```

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::array::Array;
use crate::container::Container;

/// Hasher used by [`FastHashSet`].
#[cfg(feature = "fxhash")]
pub type FastHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`FastHashSet`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastHasher = ahash::RandomState;

/// Hasher used by [`FastHashSet`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type FastHasher = std::collections::hash_map::RandomState;

/// A hash set using the feature-selected [`FastHasher`].
pub type FastHashSet<T> = HashSet<T, FastHasher>;

/// Conversion of a container into a hash set of its unique elements.
///
/// Duplicates collapse by `Eq`/`Hash`; iteration order of the result is unspecified.
pub trait ToSet: Container {
    /// Copies the unique elements into a standard [`HashSet`].
    fn to_set(&self) -> HashSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.to_set_with_hasher()
    }

    /// Copies the unique elements into a [`FastHashSet`].
    fn to_fast_set(&self) -> FastHashSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.to_set_with_hasher()
    }

    /// Copies the unique elements into a hash set with the hasher `S`.
    fn to_set_with_hasher<S>(&self) -> HashSet<Self::Item, S>
    where
        Self::Item: Clone + Eq + Hash,
        S: BuildHasher + Default,
    {
        let mut set = HashSet::with_capacity_and_hasher(self.size(), S::default());
        set.extend(self.as_slice().iter().cloned());
        set
    }
}

impl<C: Container> ToSet for C {}

/// Conversion of any iterable into an [`Array`].
///
/// The array is ordered and pre-sized to the source's lower size bound,
/// which is its exact length for lists, native arrays and slices.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use arraykit::prelude::*;
///
/// let queue = VecDeque::from([3, 4]);
/// let array = queue.iter().copied().to_array();
/// assert_eq!(array, [3, 4]);
/// assert_eq!(["a", "b"].to_array().capacity(), 2);
/// ```
pub trait ToArray: IntoIterator + Sized {
    /// Copies the elements into a new ordered [`Array`], preserving order.
    fn to_array(self) -> Array<Self::Item> {
        let source = self.into_iter();
        let mut array = Array::with_capacity(source.size_hint().0);
        array.extend(source);
        array
    }
}

impl<I: IntoIterator> ToArray for I {}
