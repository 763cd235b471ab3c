//! Property-based tests for the container laws.
//!
//! This module verifies the invariants of Array and its extensions using
//! proptest.

use arraykit::prelude::*;
use arraykit::query;
use proptest::prelude::*;

fn array_strategy() -> impl Strategy<Value = Array<i32>> {
    (prop::collection::vec(-20_i32..20, 0..40), any::<bool>()).prop_map(|(elements, ordered)| {
        let mut array = Array::with_options(ordered, elements.len());
        array.add_all(elements);
        array
    })
}

// =============================================================================
// Query Laws
// =============================================================================

proptest! {
    /// Last Index Law: last_index is always size - 1.
    #[test]
    fn prop_last_index_is_size_minus_one(array in array_strategy()) {
        let size = isize::try_from(array.size()).unwrap();
        prop_assert_eq!(Some(&array).last_index(), size - 1);
        prop_assert_eq!(query::is_not_empty(Some(&array)), size > 0);
    }

    /// Get-Or Law: in-range indices return the element, all others the default.
    #[test]
    fn prop_get_or_matches_bounds(array in array_strategy(), index in -50_isize..50) {
        let expected = usize::try_from(index)
            .ok()
            .and_then(|index| array.get(index).copied())
            .unwrap_or(i32::MIN);
        prop_assert_eq!(array.get_or(index, i32::MIN), expected);
    }
}

// =============================================================================
// Mutation Laws
// =============================================================================

proptest! {
    /// Growth Law: add_all increases size by the source size and keeps capacity >= size.
    #[test]
    fn prop_add_all_grows_by_source_size(
        array in array_strategy(),
        source in prop::collection::vec(any::<i32>(), 0..40)
    ) {
        let mut array = array;
        let before = array.size();
        array.add_all(source.clone());
        prop_assert_eq!(array.size(), before + source.len());
        prop_assert!(array.capacity() >= array.size());
    }

    /// Ordered Append Law: an ordered array ends with the appended source.
    #[test]
    fn prop_ordered_add_all_appends_in_order(
        elements in prop::collection::vec(any::<i32>(), 0..20),
        source in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let mut array = Array::from(elements.clone());
        array.add_all(source.clone());
        let mut expected = elements;
        expected.extend(source);
        prop_assert_eq!(array, expected);
    }

    /// Multiset Removal Law: each value's count drops by min(count, removed count).
    #[test]
    fn prop_remove_all_is_multiset_difference(
        array in array_strategy(),
        removed in prop::collection::vec(-20_i32..20, 0..40)
    ) {
        let original = array.clone();
        let mut array = array;
        let count = array.remove_all(&removed);

        let occurrences = |elements: &[i32], value: i32| {
            elements.iter().filter(|&&element| element == value).count()
        };
        let mut expected_removed = 0;
        for value in -20..20 {
            let before = occurrences(original.as_slice(), value);
            let requested = occurrences(removed.as_slice(), value);
            let after = occurrences(array.as_slice(), value);
            prop_assert_eq!(after, before - before.min(requested));
            expected_removed += before.min(requested);
        }
        prop_assert_eq!(count, expected_removed);
    }

    /// Traversal Law: removing by predicate through iterate equals retain.
    #[test]
    fn prop_iterate_removal_matches_retain(elements in prop::collection::vec(-20_i32..20, 0..40)) {
        let mut array = Array::from(elements.clone());
        array.iterate(|value, handle| {
            if value % 3 == 0 {
                handle.remove();
            }
        });
        let mut expected = elements;
        expected.retain(|value| value % 3 != 0);
        prop_assert_eq!(array, expected);
    }
}

// =============================================================================
// Transformation Laws
// =============================================================================

proptest! {
    /// Identity Law: map with clone yields an equal container.
    #[test]
    fn prop_map_identity(array in array_strategy()) {
        prop_assert_eq!(array.map(|value| *value), array);
    }

    /// Source Preservation Law: map and filter never mutate the source.
    #[test]
    fn prop_transforms_preserve_source(array in array_strategy()) {
        let snapshot = array.clone();
        let _ = array.map(|value| value.wrapping_mul(2));
        let _ = array.filter(|value| *value > 0);
        prop_assert_eq!(array, snapshot);
    }

    /// Flat Map Law: flat_map equals map followed by flatten.
    #[test]
    fn prop_flat_map_equals_map_then_flatten(array in array_strategy()) {
        let function = |value: &i32| vec![*value; usize::try_from(value.rem_euclid(3)).unwrap()];
        prop_assert_eq!(array.flat_map(function), array.map(function).flatten());
    }

    /// Sort Law: sort_by_key_descending leaves keys non-increasing.
    #[test]
    fn prop_sort_descending_is_non_increasing(array in array_strategy()) {
        let mut array = array;
        array.sort_by_key_descending(|value| value.abs());
        prop_assert!(array.as_slice().windows(2).all(|pair| pair[0].abs() >= pair[1].abs()));
    }

    /// Set Law: to_set contains exactly the distinct elements.
    #[test]
    fn prop_to_set_contains_distinct_elements(array in array_strategy()) {
        let set = array.to_set();
        prop_assert!(array.iter().all(|value| set.contains(value)));
        prop_assert!(set.len() <= array.size());
    }
}
