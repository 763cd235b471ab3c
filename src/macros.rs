//! Crate-level macros.
//!
//! - `array!`: builds an [`Array`](crate::array::Array) from a list of elements
//! - `trace!`: internal, forwards to `tracing::trace!` when the `tracing`
//!   feature is enabled and expands to nothing otherwise

/// Creates an [`Array`](crate::array::Array) containing the given elements.
///
/// The resulting array is ordered and its capacity equals the number of
/// elements. `array![]` creates an empty array with the default capacity.
///
/// # Examples
///
/// ```rust
/// use arraykit::prelude::*;
///
/// let empty: Array<i32> = array![];
/// assert!(empty.is_empty());
///
/// let numbers = array![1, 2, 3];
/// assert_eq!(numbers.size(), 3);
/// assert_eq!(numbers.capacity(), 3);
///
/// let zeros = array![0; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::array::Array::new()
    };
    ($element:expr; $count:expr) => {
        $crate::array::Array::from_vec(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::array::Array::from_vec(::std::vec![$($element),+])
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($argument:tt)*) => {};
}
