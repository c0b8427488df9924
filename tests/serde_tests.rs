#![cfg(feature = "serde")]

//! Integration tests for serde support in ixoptics.
//!
//! These tests verify that the plain data types serialize and deserialize
//! through JSON.

use ixoptics::control::{Either, Side};
use ixoptics::optics::{IndexCount, KindTag};
use ixoptics::typeclass::Identity;
use rstest::rstest;

// =============================================================================
// Either / Side
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
#[case(Side::Left)]
#[case(Side::Right)]
fn test_side_json_roundtrip(#[case] side: Side) {
    let json = serde_json::to_string(&side).unwrap();
    let restored: Side = serde_json::from_str(&json).unwrap();
    assert_eq!(side, restored);
}

// =============================================================================
// Identity
// =============================================================================

#[rstest]
fn test_identity_json_is_transparent_to_value() {
    let wrapped = Identity(vec![1, 2, 3]);
    let json = serde_json::to_string(&wrapped).unwrap();

    assert_eq!(json, "[1,2,3]");
    let restored: Identity<Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, wrapped);
}

// =============================================================================
// Kind and index metadata
// =============================================================================

#[rstest]
fn test_kind_tag_json_roundtrip() {
    for kind in KindTag::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let restored: KindTag = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, restored);
    }
}

#[rstest]
#[case(IndexCount::Zero)]
#[case(IndexCount::One)]
#[case(IndexCount::Many)]
fn test_index_count_json_roundtrip(#[case] count: IndexCount) {
    let json = serde_json::to_string(&count).unwrap();
    let restored: IndexCount = serde_json::from_str(&json).unwrap();
    assert_eq!(count, restored);
}
