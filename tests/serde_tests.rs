#![cfg(all(feature = "serde", feature = "combinatoric"))]
//! Serde support tests for SortedSequence and ResultSet.

use combinix::combinatoric::combinations;
use combinix::sorted::SortedSequence;
use rstest::rstest;

#[rstest]
fn test_sorted_sequence_serializes_as_array() {
    let sequence = SortedSequence::from_vec(vec![3, 1, 2]);
    assert_eq!(serde_json::to_string(&sequence).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_sorted_sequence_deserialization_sorts() {
    let sequence: SortedSequence<i32> = serde_json::from_str("[5, -1, 3, 3]").unwrap();
    assert_eq!(sequence.as_slice(), &[-1, 3, 3, 5]);
}

#[rstest]
fn test_result_set_serializes_every_group() {
    let groups = combinations(&['r', 'r', 'b'], 2).unwrap();
    let json = serde_json::to_value(&groups).unwrap();
    let mut decoded: Vec<Vec<char>> = serde_json::from_value(json).unwrap();
    decoded.sort();
    assert_eq!(decoded, vec![vec!['b', 'r'], vec!['r', 'r']]);
}
