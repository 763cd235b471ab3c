//! Tests for the in-place sort adapters.

use arraykit::prelude::*;
use rstest::rstest;

#[rstest]
fn test_sort_by_key_on_string_length() {
    let mut words = array!["Twenty-one", "Eleven", "One"];
    words.sort_by_key(|word| word.len());
    assert_eq!(words, ["One", "Eleven", "Twenty-one"]);
}

#[rstest]
fn test_sort_by_key_descending_on_string_length() {
    let mut words = array!["One", "Twenty-one", "Eleven"];
    words.sort_by_key_descending(|word| word.len());
    assert_eq!(words, ["Twenty-one", "Eleven", "One"]);
}

#[rstest]
#[case(vec![3, 1, 2], vec![3, 2, 1])]
#[case(vec![1, 1, 0], vec![1, 1, 0])]
#[case(vec![5], vec![5])]
#[case(vec![], vec![])]
fn test_sort_descending(#[case] initial: Vec<i64>, #[case] expected: Vec<i64>) {
    let mut array = Array::from(initial);
    array.sort_descending();
    assert_eq!(array, expected);
}

#[rstest]
fn test_sort_descending_by_key_is_stable() {
    let mut array = array![("b", 1), ("a", 2), ("c", 1), ("d", 2)];
    array.sort_by_key_descending(|pair| pair.1);
    assert_eq!(array, [("a", 2), ("d", 2), ("b", 1), ("c", 1)]);
}

#[rstest]
fn test_sort_keeps_size_and_elements() {
    let mut array = to_int_array(&[4, -1, 4, 0]);
    array.sort_by_key(|value| value.abs());
    assert_eq!(array.size(), 4);
    assert_eq!(array, [0, -1, 4, 4]);
}

#[rstest]
fn test_sort_unordered_array() {
    let mut array: Array<char> = Array::with_options(false, 4);
    array.add_all(['c', 'a', 'b']);
    array.sort_by_key(|character| *character);
    assert_eq!(array, ['a', 'b', 'c']);
    assert!(!array.is_ordered());
}

// =============================================================================
// Floating-Point Sorts
// =============================================================================

#[rstest]
fn test_float_array_sorts_descending() {
    let mut array = to_float_array(&[1.0, 3.0, 2.0]);
    array.sort_descending_total();
    assert_eq!(array, [3.0, 2.0, 1.0]);
}

#[rstest]
fn test_sort_by_float_key() {
    let mut points = array![(2.5_f64, "far"), (0.5, "near"), (1.0, "middle")];
    points.sort_by_total_key(|point| point.0);
    assert_eq!(points.map(|point| point.1), ["near", "middle", "far"]);

    points.sort_by_total_key_descending(|point| point.0);
    assert_eq!(points.map(|point| point.1), ["far", "middle", "near"]);
}

#[rstest]
fn test_float_sort_descending_with_comparator() {
    let mut array = array![0.25_f32, -4.0, 8.0];
    array.sort_descending_by(f32::total_cmp);
    assert_eq!(array, [8.0, 0.25, -4.0]);
}
