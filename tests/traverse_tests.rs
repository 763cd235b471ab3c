//! Tests for traversal with removal.

use arraykit::prelude::*;
use rstest::rstest;

#[rstest]
fn test_iterate_removes_through_handle() {
    let mut array = array!["1", "2", "3"];
    let mut visited = Vec::new();
    array.iterate(|value, handle| {
        visited.push(*value);
        if *value == "2" {
            handle.remove();
        }
    });
    assert_eq!(visited, vec!["1", "2", "3"]);
    assert_eq!(array, ["1", "3"]);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![])]
#[case(vec![1, 2, 3, 4, 5, 6], vec![1, 3, 5])]
#[case(vec![2, 4, 6], vec![])]
#[case(vec![1, 3], vec![1, 3])]
fn test_iterate_removing_even_values(#[case] initial: Vec<i32>, #[case] expected: Vec<i32>) {
    let mut array = Array::from(initial.clone());
    let mut visits = 0;
    array.iterate(|value, handle| {
        visits += 1;
        if value % 2 == 0 {
            handle.remove();
        }
    });
    assert_eq!(visits, initial.len());
    assert_eq!(array, expected);
}

#[rstest]
fn test_iterate_removing_consecutive_elements() {
    let mut array = array!['a', 'b', 'c', 'd'];
    array.iterate(|value, handle| {
        if *value == 'b' || *value == 'c' {
            handle.remove();
        }
    });
    assert_eq!(array, ['a', 'd']);
}

#[rstest]
fn test_iterate_on_unordered_array_visits_every_original_element() {
    let mut array: Array<i32> = Array::with_options(false, 8);
    array.add_all([1, 2, 3, 4, 5]);
    let mut visited = Vec::new();
    array.iterate(|value, handle| {
        visited.push(*value);
        if value % 2 == 1 {
            handle.remove();
        }
    });
    visited.sort_unstable();
    assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    let mut remaining = array.to_vec();
    remaining.sort_unstable();
    assert_eq!(remaining, vec![2, 4]);
}

#[rstest]
fn test_iterate_without_removal_leaves_container_unchanged() {
    let mut array = array![1, 2, 3];
    array.iterate(|_, _| {});
    assert_eq!(array, [1, 2, 3]);
}

#[rstest]
fn test_handle_reports_removal() {
    let mut array = array![1];
    array.iterate(|_, handle| {
        assert!(!handle.is_removed());
        handle.remove();
        assert!(handle.is_removed());
    });
    assert!(array.is_empty());
}

#[rstest]
fn test_cursor_drives_manual_traversal() {
    let mut array = array![10, 11, 12];
    let mut cursor = Cursor::new(&mut array);
    let mut removed = Vec::new();
    while let Some(&value) = cursor.advance() {
        if value > 10 {
            removed.extend(cursor.remove());
        }
    }
    assert_eq!(removed, vec![11, 12]);
    assert_eq!(array, [10]);
}

#[rstest]
fn test_remove_where_and_retain_where() {
    let mut array = to_short_array(&[-2, -1, 0, 1, 2]);
    assert_eq!(array.remove_where(|value| *value < 0), 2);
    assert_eq!(array.retain_where(|value| *value != 0), 1);
    assert_eq!(array, [1, 2]);
}

#[rstest]
fn test_transfer_between_container_families() {
    let mut source = vec!["a", "bb", "ccc"];
    let mut destination: Array<&str> = Array::new();
    assert_eq!(source.transfer(&mut destination, |word| word.len() > 1), 2);
    assert_eq!(source, vec!["a"]);
    assert_eq!(destination, ["bb", "ccc"]);
}
