//! Error types for the array container.
//!
//! The convenience layer itself never fails: lookups substitute defaults and
//! removals of missing values are no-ops. Only the `try_*` primitives of
//! [`Array`](crate::array::Array) report errors, for callers that prefer a
//! `Result` over the panicking index operations.

/// Represents errors raised by the fallible primitives of [`Array`](crate::array::Array).
///
/// # Examples
///
/// ```rust
/// use arraykit::error::ArrayError;
///
/// let error = ArrayError::IndexOutOfBounds { index: 5, size: 3 };
/// assert_eq!(format!("{error}"), "index 5 is out of bounds for array of size 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The index does not address an element (or, for insertion, a gap).
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The size of the array at the time of the call.
        size: usize,
    },
}

impl std::fmt::Display for ArrayError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, size } => write!(
                formatter,
                "index {index} is out of bounds for array of size {size}"
            ),
        }
    }
}

impl std::error::Error for ArrayError {}
