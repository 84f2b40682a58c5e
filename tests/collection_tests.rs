#![cfg(feature = "collection")]
//! Integration tests for the collection operations.

use rudash::collection::{
    count_by, every, filter, find, find_last, flat_map, flat_map_deep, for_each, group_by,
    includes, map, reduce, reduce_right, reduce_with_initial, reject, size, some, sort_by,
};
use rudash::nested;
use rudash::sequence::Nested;
use rstest::rstest;

#[derive(Clone, Debug, PartialEq)]
struct Order {
    customer: &'static str,
    total: f64,
}

fn orders() -> Vec<Order> {
    vec![
        Order { customer: "ana", total: 12.5 },
        Order { customer: "bo", total: 3.0 },
        Order { customer: "ana", total: 7.5 },
        Order { customer: "cy", total: 30.0 },
    ]
}

// =============================================================================
// Grouping
// =============================================================================

#[rstest]
fn test_group_by_floor_scenario() {
    let groups = group_by(&[6.1, 4.2, 6.3], |value: &f64| value.floor() as i64);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&6], vec![6.1, 6.3]);
    assert_eq!(groups[&4], vec![4.2]);
}

#[rstest]
fn test_group_by_then_reduce_totals() {
    let groups = group_by(&orders(), |order| order.customer);
    let ana_total = reduce_with_initial(&groups["ana"], 0.0, |sum, order| sum + order.total);
    assert!((ana_total - 20.0).abs() < f64::EPSILON);
    assert_eq!(groups["cy"].len(), 1);
}

#[rstest]
fn test_count_by_customer() {
    let counts = count_by(&orders(), |order| order.customer);
    assert_eq!(counts["ana"], 2);
    assert_eq!(counts["bo"], 1);
    assert!(!counts.contains_key("dee"));
}

// =============================================================================
// Iteration and folding
// =============================================================================

#[rstest]
fn test_map_filter_reduce_pipeline() {
    let totals = map(&orders(), |order| order.total);
    let large = filter(&totals, |total| *total > 5.0);
    assert_eq!(large, vec![12.5, 7.5, 30.0]);
    assert_eq!(reduce(&large, |sum, total| sum + total), Some(50.0));
}

#[rstest]
fn test_reject_complements_filter() {
    let small = reject(&orders(), |order| order.total > 5.0);
    assert_eq!(small, vec![Order { customer: "bo", total: 3.0 }]);
}

#[rstest]
fn test_reduce_right_builds_reversed_text() {
    let letters = ["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(reduce_right(&letters, |text, letter| text + letter).as_deref(), Some("cba"));
}

#[rstest]
fn test_for_each_collects_indices() {
    let mut indices = Vec::new();
    let items = for_each(&orders(), |_, index| indices.push(index)).len();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(items, 4);
}

#[rstest]
#[case(vec![], true, false)]
#[case(vec![2, 4], true, true)]
#[case(vec![1, 2], false, true)]
#[case(vec![1, 3], false, false)]
fn test_every_and_some(#[case] items: Vec<i32>, #[case] all_even: bool, #[case] any_even: bool) {
    assert_eq!(every(&items, |value| value % 2 == 0), all_even);
    assert_eq!(some(&items, |value| value % 2 == 0), any_even);
}

#[rstest]
fn test_includes_and_size() {
    let items = ["x", "y"];
    assert!(includes(&items, &"y"));
    assert!(!includes(&items, &"z"));
    assert_eq!(size(&items), 2);
}

// =============================================================================
// Searching and sorting
// =============================================================================

#[rstest]
fn test_find_and_find_last() {
    let all = orders();
    assert_eq!(find(&all, |order| order.customer == "ana").map(|order| order.total), Some(12.5));
    assert_eq!(find_last(&all, |order| order.customer == "ana").map(|order| order.total), Some(7.5));
    assert!(find(&all, |order| order.total > 100.0).is_none());
}

#[rstest]
fn test_sort_by_total_is_stable() {
    let mut all = orders();
    all.push(Order { customer: "dee", total: 3.0 });
    let sorted = sort_by(&all, |order| order.total);
    let customers: Vec<&str> = sorted.iter().map(|order| order.customer).collect();
    assert_eq!(customers, vec!["bo", "dee", "ana", "ana", "cy"]);
}

#[rstest]
fn test_sort_by_nan_keeps_position() {
    let sorted = sort_by(&[3.0, 1.0, f64::NAN, 2.0], |value| *value);
    assert_eq!(&sorted[..2], &[1.0, 3.0]);
    assert!(sorted[2].is_nan());
    assert_eq!(sorted[3], 2.0);
}

// =============================================================================
// Flat mapping
// =============================================================================

#[rstest]
fn test_flat_map_words_into_letters() {
    let words = ["ab", "c"];
    let letters = flat_map_deep(&words, |word| Nested::from_values(word.chars()));
    assert_eq!(letters, vec!['a', 'b', 'c']);
}

#[rstest]
fn test_flat_map_keeps_deeper_levels() {
    let result = flat_map(&[1, 2], |value| {
        Nested::Sequence(vec![Nested::Scalar(*value), Nested::from_values([*value * 10])])
    });
    assert_eq!(result, nested![1, [10], 2, [20]]);
}
