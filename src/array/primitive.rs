//! Primitive specializations of [`Array`].
//!
//! Each specialization is an [`Array`] of an unboxed scalar, so it shares every
//! operation and invariant of the generic container. For each one this module
//! also provides a `to_<family>_array` function copying a native slice into it.
//!
//! | Alias          | Element |
//! |----------------|---------|
//! | `IntArray`     | `i32`   |
//! | `FloatArray`   | `f32`   |
//! | `BooleanArray` | `bool`  |
//! | `CharArray`    | `u16`   |
//! | `LongArray`    | `i64`   |
//! | `ShortArray`   | `i16`   |
//!
//! # Examples
//!
//! ```rust
//! use arraykit::array::{to_boolean_array, to_int_array, BooleanArray, IntArray};
//!
//! let numbers: IntArray = to_int_array(&[1, 2, 3]);
//! assert_eq!(numbers[2], 3);
//!
//! let flags: BooleanArray = to_boolean_array(&[true, false, true]);
//! assert_eq!(flags.size(), 3);
//! ```

use super::Array;

macro_rules! primitive_arrays {
    ($($family:ident => $scalar:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Resizable array of unboxed `" $scalar "` values."]
                pub type [<$family Array>] = Array<$scalar>;

                #[doc = "Copies a native `" $scalar "` slice into a new array, preserving order and sized to fit."]
                #[inline]
                #[must_use]
                pub fn [<to_ $family:snake _array>](source: &[$scalar]) -> [<$family Array>] {
                    Array::from_slice(source)
                }
            )*
        }
    };
}

primitive_arrays! {
    Int => i32,
    Float => f32,
    Boolean => bool,
    Char => u16,
    Long => i64,
    Short => i16,
}
