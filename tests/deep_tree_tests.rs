//! Degenerate (list-shaped) trees must not exhaust the call stack.

use bst_dictionary::BstDictionary;
use rstest::{fixture, rstest};

const DEPTH: i32 = 20_000;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Keys inserted in ascending order form a single right spine.
#[fixture]
fn right_spine() -> BstDictionary<i32, i32> {
    init_logger();
    (0..DEPTH).map(|key| (key, -key)).collect()
}

#[rstest]
fn test_spine_height_equals_length(right_spine: BstDictionary<i32, i32>) {
    assert_eq!(right_spine.len(), 20_000);
    assert_eq!(right_spine.height(), 20_000);
    assert_eq!(right_spine.get(&(DEPTH - 1)), Some(&-(DEPTH - 1)));
}

#[rstest]
fn test_traversals_on_spine(right_spine: BstDictionary<i32, i32>) {
    assert!(right_spine.iter().copied().eq(0..DEPTH));
    assert_eq!(right_spine.level_order().count(), 20_000);
    assert!(right_spine.contains_value(&-(DEPTH / 2)));
    assert!(right_spine.to_string().starts_with("{0: 0, 1: -1, 2: -2"));
}

#[rstest]
fn test_drop_spine(right_spine: BstDictionary<i32, i32>) {
    drop(right_spine);
}

#[rstest]
fn test_into_iter_spine(right_spine: BstDictionary<i32, i32>) {
    let mut entries = right_spine.into_iter();
    assert_eq!(entries.next(), Some((0, 0)));
    assert_eq!(entries.len(), 19_999);
}

#[rstest]
fn test_remove_from_root_of_spine(right_spine: BstDictionary<i32, i32>) {
    let mut dictionary = right_spine;
    for key in 0..DEPTH {
        assert_eq!(dictionary.remove(&key), Some(-key));
    }
    assert!(dictionary.is_empty());
}

#[rstest]
fn test_clear_left_spine() {
    init_logger();
    let mut dictionary: BstDictionary<i32, ()> = (0..DEPTH).rev().map(|key| (key, ())).collect();
    assert_eq!(dictionary.min(), Some((&0, &())));
    dictionary.clear();
    assert!(dictionary.is_empty());
    assert_eq!(dictionary.height(), 0);
}
