//! Combinations and permutations of multisets.
//!
//! This module enumerates every distinct group of `r` elements drawn from an
//! input that may contain duplicate values:
//!
//! - [`combinations`]: unordered groups, each rendered in sorted order
//! - [`permutations`]: ordered groups, each in selection order
//! - [`factorial`], [`binomial`], [`permutation_count`]: checked counts
//!
//! Duplicate values are handled by giving every input position its own
//! identity during the search ([`IdentityOrderedElement`]), and collapsing
//! groups by value only at the end ([`ResultSet`]).
//!
//! # Examples
//!
//! ```rust
//! use combinix::combinatoric::{combinations, permutations};
//!
//! let input = ['r', 'r', 'b', 'b', 'b'];
//!
//! let unordered = combinations(&input, 2).unwrap();
//! assert_eq!(
//!     unordered.to_sorted_vec(),
//!     vec![vec!['b', 'b'], vec!['b', 'r'], vec!['r', 'r']]
//! );
//!
//! let ordered = permutations(&input, 2).unwrap();
//! assert_eq!(
//!     ordered.to_sorted_vec(),
//!     vec![vec!['b', 'b'], vec!['b', 'r'], vec!['r', 'b'], vec!['r', 'r']]
//! );
//! ```
//!
//! Results are fully materialized. Enumeration cost grows combinatorially with
//! the input size and `r`; use [`binomial`] or [`permutation_count`] to check
//! sizes before enumerating large inputs.

mod counting;
mod engine;
mod identity;
mod result_set;

use std::hash::Hash;

pub use counting::{binomial, factorial, permutation_count};
pub use engine::{CombinatoricEngine, ResultShape};
pub use identity::IdentityOrderedElement;
pub use result_set::ResultSet;

use crate::error::Result;
use crate::sorted::OrderingPolicy;

/// Returns every distinct unordered group of `r` values from `input`.
///
/// Groups are sorted by the natural ordering of `T`. A value repeated k times
/// in `input` appears at most k times in a group. `r == 0` yields an empty set,
/// not a set holding one empty group.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `r` is
/// negative.
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::combinations;
///
/// let groups = combinations(&[1, 2, 3, 4], 2).unwrap();
/// assert_eq!(groups.len(), 6);
/// assert!(combinations(&[1, 2, 3], 0).unwrap().is_empty());
/// ```
pub fn combinations<T>(input: &[T], r: i64) -> Result<ResultSet<T>>
where
    T: Ord + Hash + Clone,
{
    combinations_with(input, r, OrderingPolicy::natural())
}

/// Like [`combinations`], with groups sorted under `policy`.
///
/// Groups are still deduplicated by `Eq`. Values that `policy` ties but that
/// are not equal are ordered inside a group by their first position in
/// `input`, so each distinct multiset yields exactly one group.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `r` is
/// negative, and [`Error::UnorderedElement`](crate::Error::UnorderedElement)
/// if groups of two or more values must be sorted under an unresolved policy.
pub fn combinations_with<T>(input: &[T], r: i64, policy: OrderingPolicy<T>) -> Result<ResultSet<T>>
where
    T: Eq + Hash + Clone,
{
    if r == 0 {
        return Ok(ResultSet::new());
    }
    CombinatoricEngine::new(input, ResultShape::Combination, policy).generate(r)
}

/// Returns every distinct ordered group of `r` values from `input`.
///
/// Groups keep the order in which their values were selected. Two selections
/// that differ only in which of several equal values was picked collapse into
/// one group. Permutations never compare elements, so `T` needs no ordering.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `r` is
/// negative.
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::permutations;
///
/// assert_eq!(permutations(&[1, 2, 3], 2).unwrap().len(), 6);
/// assert_eq!(permutations(&[1, 1, 1], 2).unwrap().len(), 1);
/// ```
pub fn permutations<T>(input: &[T], r: i64) -> Result<ResultSet<T>>
where
    T: Eq + Hash + Clone,
{
    CombinatoricEngine::new(input, ResultShape::Permutation, OrderingPolicy::unresolved())
        .generate(r)
}
