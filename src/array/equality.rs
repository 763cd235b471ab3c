//! Equality modes for value-based search and removal.
//!
//! [`Array`](super::Array) can match a value either by structural equality
//! (`PartialEq`) or by identity. Identity has no universal meaning for Rust
//! values, so it is expressed through the [`Identity`] trait:
//!
//! - shared pointers (`Rc`, `Arc`) and references are identical when they
//!   point at the same allocation
//! - scalars are identical when their bit patterns match, so `0.0` and
//!   `-0.0` are equal but not identical, and a `NaN` is identical to itself
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use arraykit::array::{Equality, Identity};
//!
//! let shared = Rc::new(String::from("value"));
//! let alias = Rc::clone(&shared);
//! let copy = Rc::new(String::from("value"));
//!
//! assert!(Equality::Identity.matches(&shared, &alias));
//! assert!(!Equality::Identity.matches(&shared, &copy));
//! assert!(Equality::Structural.matches(&shared, &copy));
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// Selects how a value is compared against the elements of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Equality {
    /// Elements match when they are the same instance (see [`Identity`]).
    Identity,
    /// Elements match when they compare equal with `PartialEq`.
    #[default]
    Structural,
}

impl Equality {
    /// Returns `true` if `left` and `right` match under this mode.
    #[inline]
    pub fn matches<T>(self, left: &T, right: &T) -> bool
    where
        T: PartialEq + Identity + ?Sized,
    {
        match self {
            Self::Identity => left.is_identical(right),
            Self::Structural => left == right,
        }
    }
}

/// Types whose values can be compared by identity rather than by content.
pub trait Identity {
    /// Returns `true` if `self` and `other` are the same instance.
    fn is_identical(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self, *other)
    }
}

impl<T: Identity> Identity for Option<T> {
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.is_identical(right),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! scalar_identity {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Identity for $scalar {
                #[inline]
                fn is_identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

scalar_identity!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Identity for f32 {
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Identity for f64 {
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_equality_is_structural() {
        assert_eq!(Equality::default(), Equality::Structural);
    }

    #[rstest]
    fn test_references_are_identical_only_for_same_address() {
        let first = String::from("same");
        let second = String::from("same");

        assert!(Equality::Identity.matches(&&first, &&first));
        assert!(!Equality::Identity.matches(&&first, &&second));
        assert!(Equality::Structural.matches(&&first, &&second));
    }

    #[rstest]
    fn test_arc_identity_follows_allocation() {
        let shared = Arc::new(7);
        let alias = Arc::clone(&shared);
        let other = Arc::new(7);

        assert!(shared.is_identical(&alias));
        assert!(!shared.is_identical(&other));
    }

    #[rstest]
    #[case(0.0, -0.0, false, true)]
    #[case(1.5, 1.5, true, true)]
    #[case(f32::NAN, f32::NAN, true, false)]
    fn test_float_identity_is_bitwise(
        #[case] left: f32,
        #[case] right: f32,
        #[case] identical: bool,
        #[case] equal: bool,
    ) {
        assert_eq!(Equality::Identity.matches(&left, &right), identical);
        assert_eq!(Equality::Structural.matches(&left, &right), equal);
    }

    #[rstest]
    fn test_option_identity() {
        let shared = Rc::new(1);
        assert!(Some(Rc::clone(&shared)).is_identical(&Some(Rc::clone(&shared))));
        assert!(!Some(shared).is_identical(&None));
        assert!(None::<Rc<i32>>.is_identical(&None));
    }
}
