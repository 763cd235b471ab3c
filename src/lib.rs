//! # arraykit
//!
//! A convenience layer over resizable arrays. It provides null-tolerant
//! queries, chainable in-place mutation, and functional transformations
//! that the plain container does not offer.
//!
//! ## Overview
//!
//! - **Container**: [`Array`](array::Array), a resizable array with an
//!   `ordered` flag and identity/structural equality modes, plus its
//!   primitive specializations (`IntArray`, `FloatArray`, ...)
//! - **Queries**: `size`, `is_empty`, `is_not_empty`, `last_index` that
//!   accept an absent (`None`) container
//! - **Indexed Access**: lookups that fall back to a caller-supplied default
//! - **Mutation**: `add_all`, `remove_all`, and chainable `plus`/`minus`
//! - **Traversal**: iteration that may remove the current element
//! - **Sorting**: descending and key-derived sorts, in place
//! - **Transformations**: `map`, `filter`, `flatten`, `flat_map` into fresh
//!   containers of the same family
//! - **Conversions**: to and from sets, vectors, and native arrays
//!
//! Every extension is a trait with a blanket implementation over
//! [`Container`](container::Container), so it applies to both [`Array`](array::Array)
//! and [`Vec`].
//!
//! ## Feature Flags
//!
//! - `fxhash`: `FastHashSet` uses `rustc-hash`
//! - `ahash`: `FastHashSet` uses `ahash`
//! - `tracing`: emit `trace` events from bulk mutation and array growth
//! - `full`: Enable `fxhash` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let mut words = array!["1", "2", "3", "4"];
//! words.plus("5").minus("2").plus_all(["7"]).minus_all(["4", "6"]);
//! assert_eq!(words, ["1", "3", "5", "7"]);
//!
//! let absent: Option<&Array<&str>> = None;
//! assert_eq!(absent.last_index(), -1);
//!
//! let lengths = words.map(|word| word.len());
//! assert_eq!(lengths, [1, 1, 1, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod macros;

/// Prelude module for convenient imports.
///
/// Re-exports the container types, the `array!` macro and every extension trait.
///
/// # Usage
///
/// ```rust
/// use arraykit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::access::*;
    pub use crate::array::*;
    pub use crate::container::*;
    pub use crate::convert::*;
    pub use crate::error::*;
    pub use crate::mutation::*;
    pub use crate::query::NullableQuery;
    pub use crate::sort::*;
    pub use crate::transform::*;
    pub use crate::traverse::*;

    pub use crate::array;
}

pub mod access;
pub mod array;
pub mod container;
pub mod convert;
pub mod error;
pub mod mutation;
pub mod query;
pub mod sort;
pub mod transform;
pub mod traverse;
