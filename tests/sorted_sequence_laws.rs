#![cfg(feature = "sorted")]
//! Property-based tests for SortedSequence laws.
//!
//! These tests verify that the sequence stays sorted and keeps every inserted
//! element, whatever mix of single and bulk inserts produced it.

use combinix::sorted::{OrderingPolicy, SortedSequence};
use proptest::prelude::*;

fn sorted_copy(elements: &[i32]) -> Vec<i32> {
    let mut expected = elements.to_vec();
    expected.sort_unstable();
    expected
}

// =============================================================================
// Sortedness Law
// Description: Adjacent elements are never out of order
// =============================================================================

proptest! {
    #[test]
    fn prop_single_inserts_keep_order(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let mut sequence = SortedSequence::new();
        for element in &elements {
            sequence.insert(*element).unwrap();
        }
        prop_assert!(sequence.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(sequence.into_vec(), sorted_copy(&elements));
    }

    #[test]
    fn prop_bulk_insert_equals_sorted_concatenation(
        initial in prop::collection::vec(-50..50_i32, 0..60),
        batch in prop::collection::vec(-50..50_i32, 0..60)
    ) {
        let mut sequence = SortedSequence::from_vec(initial.clone());
        let changed = sequence.insert_all(batch.clone()).unwrap();

        prop_assert_eq!(changed, !batch.is_empty());

        let mut all = initial;
        all.extend(batch);
        prop_assert_eq!(sequence.into_vec(), sorted_copy(&all));
    }
}

// =============================================================================
// Insert-Path Equivalence Law
// Description: Single inserts and one bulk insert produce the same sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_single_and_bulk_insert_agree(
        elements in prop::collection::vec(any::<i16>(), 0..80)
    ) {
        let mut one_by_one = SortedSequence::new();
        for element in &elements {
            one_by_one.insert(*element).unwrap();
        }
        let mut bulk = SortedSequence::new();
        bulk.insert_all(elements.iter().copied()).unwrap();

        prop_assert_eq!(one_by_one, bulk);
    }
}

// =============================================================================
// Comparator Law
// Description: An explicit comparator is honored by every insert path
// =============================================================================

proptest! {
    #[test]
    fn prop_descending_comparator_is_honored(
        initial in prop::collection::vec(any::<i32>(), 0..40),
        single in any::<i32>(),
        batch in prop::collection::vec(any::<i32>(), 0..40)
    ) {
        let policy = OrderingPolicy::by(|left: &i32, right: &i32| right.cmp(left));
        let mut sequence = SortedSequence::from_vec_with_policy(policy, initial).unwrap();
        sequence.insert(single).unwrap();
        sequence.insert_all(batch).unwrap();

        prop_assert!(sequence.as_slice().windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

// =============================================================================
// Atomicity Law
// Description: A batch with an absent element changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_element_rejects_whole_batch(
        initial in prop::collection::vec(any::<i32>(), 0..40),
        batch in prop::collection::vec(any::<i32>(), 0..40),
        hole in any::<prop::sample::Index>()
    ) {
        let mut sequence = SortedSequence::from_vec(initial.clone());
        let mut with_hole: Vec<Option<i32>> = batch.into_iter().map(Some).collect();
        let position = hole.index(with_hole.len() + 1);
        with_hole.insert(position, None);

        prop_assert!(sequence.try_insert_all(Some(with_hole)).is_err());
        prop_assert_eq!(sequence.into_vec(), sorted_copy(&initial));
    }
}
