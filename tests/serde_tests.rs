#![cfg(all(feature = "serde", feature = "sequence"))]

//! Integration tests for serde support.
//!
//! `Nested` serializes untagged, so nested sequences map to plain JSON
//! arrays and scalars to plain JSON values.

use rstest::rstest;
use rudash::nested;
use rudash::sequence::{Depth, Nested, flatten_deep};

// =============================================================================
// Nested Integration Tests
// =============================================================================

#[rstest]
fn test_nested_serializes_as_plain_arrays() {
    let items = Nested::Sequence(nested![1, [2, 3]]);
    assert_eq!(serde_json::to_string(&items).unwrap(), "[1,[2,3]]");
}

#[rstest]
fn test_nested_json_roundtrip() {
    let items = Nested::Sequence(nested!["a", ["b", ["c"]], []]);
    let json = serde_json::to_string(&items).unwrap();
    let restored: Nested<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.depth(), items.depth());
    assert_eq!(restored.to_string(), items.to_string());
}

#[rstest]
fn test_nested_from_json_then_flatten() {
    let restored: Vec<Nested<i64>> = serde_json::from_str("[1, [2, [3, [4]], 5]]").unwrap();
    assert_eq!(flatten_deep(&restored), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_nested_scalar_roundtrip() {
    let scalar = Nested::Scalar(42);
    let json = serde_json::to_string(&scalar).unwrap();
    assert_eq!(json, "42");
    let restored: Nested<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, scalar);
}

// =============================================================================
// Depth Integration Tests
// =============================================================================

#[rstest]
#[case(Depth::Levels(3))]
#[case(Depth::Levels(0))]
#[case(Depth::Unlimited)]
fn test_depth_json_roundtrip(#[case] depth: Depth) {
    let json = serde_json::to_string(&depth).unwrap();
    let restored: Depth = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, depth);
}
