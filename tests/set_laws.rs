#![cfg(feature = "set")]
//! Property-based tests for the set-style operations.
//!
//! 1. **Uniq Idempotence**: `uniq(uniq(s)) == uniq(s)`
//! 2. **Union Idempotence**: `union([union([a, b])]) == union([a, b])`
//! 3. **Intersection Idempotence**: `intersection(uniq(a), uniq(a)) == uniq(a)`
//! 4. **Difference Partition**: every element of `a` is in exactly one of
//!    `intersection(a, b)` and `difference(a, b)`
//! 5. **Xor Self-Inverse**: `xor([s, s]) == []`
//! 6. **Xor Commutativity** (as sets): `xor([a, b])` and `xor([b, a])` hold
//!    the same elements
//! 7. **Key/Comparison Agreement**: `uniq_by` with the identity key equals
//!    `uniq_with` with `==`

use proptest::prelude::*;
use rudash::function::cloned;
use rudash::set::{
    difference, intersection, union, uniq, uniq_by, uniq_with, xor, xor_by, xor_with,
};

fn small_vec() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..16, 0..24)
}

fn sorted(mut items: Vec<u8>) -> Vec<u8> {
    items.sort_unstable();
    items
}

proptest! {
    #[test]
    fn prop_uniq_idempotence(items in small_vec()) {
        let once = uniq(&items);
        prop_assert_eq!(uniq(&once), once);
    }

    #[test]
    fn prop_union_idempotence(left in small_vec(), right in small_vec()) {
        let merged = union(&[&left[..], &right[..]]);
        prop_assert_eq!(union(&[&merged[..]]), merged);
    }

    #[test]
    fn prop_intersection_idempotence(items in small_vec()) {
        let unique = uniq(&items);
        prop_assert_eq!(intersection(&unique, &unique), unique);
    }

    #[test]
    fn prop_difference_partition(left in small_vec(), right in small_vec()) {
        let common = intersection(&left, &right);
        let only_left = difference(&left, &right);
        prop_assert_eq!(common.len() + only_left.len(), left.len());
        prop_assert!(only_left.iter().all(|item| !right.contains(item)));
    }

    #[test]
    fn prop_xor_self_inverse(items in small_vec()) {
        prop_assert!(xor(&[&items[..], &items[..]]).is_empty());
    }

    #[test]
    fn prop_xor_commutative_as_sets(left in small_vec(), right in small_vec()) {
        let forward = sorted(xor(&[&left[..], &right[..]]));
        let backward = sorted(xor(&[&right[..], &left[..]]));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_xor_variants_agree(left in small_vec(), right in small_vec()) {
        let slices = [&left[..], &right[..]];
        let plain = xor(&slices);
        prop_assert_eq!(xor_by(&slices, cloned), plain.clone());
        prop_assert_eq!(xor_with(&slices, |first, second| first == second), plain);
    }

    #[test]
    fn prop_uniq_variants_agree(items in small_vec()) {
        let plain = uniq(&items);
        prop_assert_eq!(uniq_by(&items, cloned), plain.clone());
        prop_assert_eq!(uniq_with(&items, |first, second| first == second), plain);
    }
}
