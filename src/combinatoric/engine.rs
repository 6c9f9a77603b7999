//! Duplicate-aware enumeration of combinations and permutations.
//!
//! # Algorithm
//!
//! 1. Every input element is wrapped once into an [`IdentityOrderedElement`],
//!    forming an arena indexed by identity.
//! 2. A depth-first search picks `r` distinct arena positions. A per-position
//!    `available` marker is cleared while a position is part of the current
//!    branch and restored when the branch returns.
//! 3. Each complete selection is stored in a working set under its canonical
//!    key (see [`ResultShape`]). Membership there is by wrapper identity, so
//!    two selections of equal-valued but different positions stay distinct.
//! 4. Every selection is rendered back into values and inserted into a
//!    [`ResultSet`], whose membership is by value. This is where selections
//!    of different duplicate positions with equal values collapse.
//!
//! Combination groups are sorted under the engine's policy. Values the policy
//! ties but `Eq` tells apart are ordered by the first input position holding
//! an equal value, so a multiset renders the same way whichever positions
//! were picked.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::identity::IdentityOrderedElement;
use super::result_set::{GroupHasher, ResultSet};
use crate::error::{Error, Result};
use crate::sorted::{OrderingPolicy, SortedSequence};

/// Selections of up to this many picks are kept inline.
const INLINE_SELECTION: usize = 8;

type Selection<'a, T> = SmallVec<[IdentityOrderedElement<'a, T>; INLINE_SELECTION]>;

type WorkingSet<'a, T> = HashSet<Selection<'a, T>, GroupHasher>;

/// The shape of the groups an engine produces.
///
/// Each variant selects a canonical identity key for the working set and a
/// rendering for the final values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultShape {
    /// Unordered selections, rendered in value-sorted order.
    Combination,
    /// Ordered selections, rendered in selection order.
    Permutation,
}

impl ResultShape {
    /// Returns `true` if a selection may only grow with positions after its
    /// last pick.
    ///
    /// For unordered selections every identity set is then reached exactly
    /// once instead of once per ordering.
    const fn extends_after_last_pick(self) -> bool {
        matches!(self, Self::Combination)
    }

    /// Returns the working-set key for a complete selection.
    ///
    /// Combination selections are built in ascending identity order, which
    /// already makes them canonical.
    fn canonical_key<'a, T>(self, selection: &Selection<'a, T>) -> Selection<'a, T> {
        debug_assert!(
            !self.extends_after_last_pick()
                || selection
                    .windows(2)
                    .all(|pair| pair[0].identity() < pair[1].identity())
        );
        selection.clone()
    }
}

/// Enumerates groups of `r` elements drawn from a borrowed multiset.
///
/// The engine never mutates its input. All wrappers and intermediate sets live
/// only for the duration of [`generate`](Self::generate).
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::{CombinatoricEngine, ResultShape};
/// use combinix::sorted::OrderingPolicy;
///
/// let input = ['r', 'r', 'b', 'b', 'b'];
/// let engine = CombinatoricEngine::new(&input, ResultShape::Permutation, OrderingPolicy::natural());
///
/// let groups = engine.generate(2).unwrap();
/// assert_eq!(groups.len(), 4);
/// assert!(groups.contains(&['b', 'r']));
/// ```
#[derive(Debug)]
pub struct CombinatoricEngine<'a, T> {
    arena: Vec<IdentityOrderedElement<'a, T>>,
    shape: ResultShape,
    policy: OrderingPolicy<T>,
}

impl<'a, T> CombinatoricEngine<'a, T> {
    /// Creates an engine over `input`.
    ///
    /// `policy` orders the values of combination groups. Permutation groups
    /// are never compared.
    pub fn new(input: &'a [T], shape: ResultShape, policy: OrderingPolicy<T>) -> Self {
        Self {
            arena: IdentityOrderedElement::wrap_all(input),
            shape,
            policy,
        }
    }

    /// Returns the shape of the groups this engine produces.
    #[inline]
    pub const fn shape(&self) -> ResultShape {
        self.shape
    }

    /// Returns the number of input elements.
    #[inline]
    pub fn input_len(&self) -> usize {
        self.arena.len()
    }

    /// Generates every distinct group of `r` elements.
    ///
    /// An input value repeated k times may appear up to k times in a group.
    /// `r == 0` and `r` larger than the input both yield an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `r` is negative, and
    /// [`Error::UnorderedElement`] if combination groups of two or more
    /// values must be sorted under an unresolved policy.
    pub fn generate(&self, r: i64) -> Result<ResultSet<T>>
    where
        T: Clone + Eq + Hash,
    {
        if r < 0 {
            return Err(Error::InvalidArgument { name: "r", value: r });
        }
        let picks = usize::try_from(r).unwrap_or(usize::MAX);

        debug!(
            shape = ?self.shape,
            input_len = self.arena.len(),
            picks,
            "generating result groups"
        );

        if picks == 0 || picks > self.arena.len() {
            debug!(shape = ?self.shape, picks, "no selection of this size exists");
            return Ok(ResultSet::new());
        }

        let mut working = WorkingSet::with_hasher(GroupHasher::default());
        let mut available = vec![true; self.arena.len()];
        let mut selection = Selection::with_capacity(picks);
        self.search(picks, 0, &mut available, &mut selection, &mut working);
        trace!(selections = working.len(), "search complete");

        let representatives = self.representatives();
        let mut results = ResultSet::with_capacity(working.len());
        for group in &working {
            results.insert(self.render(group, &representatives)?);
        }

        debug!(
            shape = ?self.shape,
            selections = working.len(),
            groups = results.len(),
            "generated result groups"
        );
        Ok(results)
    }

    /// Depth-first search over arena positions.
    ///
    /// `available` is restored to its entry state before returning.
    fn search(
        &self,
        remaining: usize,
        start: usize,
        available: &mut [bool],
        selection: &mut Selection<'a, T>,
        working: &mut WorkingSet<'a, T>,
    ) {
        let first = if self.shape.extends_after_last_pick() {
            start
        } else {
            0
        };

        for position in first..self.arena.len() {
            if !available[position] {
                continue;
            }
            selection.push(self.arena[position]);
            if remaining > 1 {
                available[position] = false;
                self.search(remaining - 1, position + 1, available, selection, working);
                available[position] = true;
            } else {
                working.insert(self.shape.canonical_key(selection));
            }
            selection.pop();
        }
    }

    /// Maps every arena position to the first position holding an equal
    /// value.
    fn representatives(&self) -> Vec<usize>
    where
        T: Eq + Hash,
    {
        let mut first_seen: HashMap<&T, usize, GroupHasher> =
            HashMap::with_capacity_and_hasher(self.arena.len(), GroupHasher::default());
        self.arena
            .iter()
            .map(|element| *first_seen.entry(element.value()).or_insert(element.identity()))
            .collect()
    }

    /// Turns a selection of wrappers back into values.
    ///
    /// Combination values are handed to the sorted sequence in representative
    /// order. Its batch sort is stable, so policy ties keep that order.
    fn render(
        &self,
        selection: &[IdentityOrderedElement<'a, T>],
        representatives: &[usize],
    ) -> Result<Vec<T>>
    where
        T: Clone,
    {
        match self.shape {
            ResultShape::Combination => {
                let mut ordered: Selection<'a, T> = selection.iter().copied().collect();
                ordered.sort_by_key(|element| representatives[element.identity()]);
                let mut rendered = SortedSequence::with_policy(self.policy.clone());
                rendered.insert_all(ordered.iter().map(|element| element.value().clone()))?;
                Ok(rendered.into_vec())
            }
            ResultShape::Permutation => Ok(selection
                .iter()
                .map(|element| element.value().clone())
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn working_set<'a>(engine: &CombinatoricEngine<'a, char>, picks: usize) -> WorkingSet<'a, char> {
        let mut working = WorkingSet::with_hasher(GroupHasher::default());
        let mut available = vec![true; engine.input_len()];
        let mut selection = Selection::new();
        engine.search(picks, 0, &mut available, &mut selection, &mut working);
        assert!(available.iter().all(|marker| *marker));
        working
    }

    #[rstest]
    #[case(ResultShape::Combination, 1, 5)]
    #[case(ResultShape::Combination, 2, 10)]
    #[case(ResultShape::Permutation, 2, 20)]
    #[case(ResultShape::Permutation, 3, 60)]
    fn test_working_set_counts_distinct_positions(
        #[case] shape: ResultShape,
        #[case] picks: usize,
        #[case] expected: usize,
    ) {
        let input = ['r', 'r', 'b', 'b', 'b'];
        let engine = CombinatoricEngine::new(&input, shape, OrderingPolicy::natural());
        assert_eq!(working_set(&engine, picks).len(), expected);
    }

    #[rstest]
    fn test_combination_selections_are_built_in_identity_order() {
        let input = ['a', 'b', 'c', 'd'];
        let engine = CombinatoricEngine::new(&input, ResultShape::Combination, OrderingPolicy::natural());
        for key in working_set(&engine, 3) {
            let identities: Vec<usize> = key.iter().map(IdentityOrderedElement::identity).collect();
            assert!(identities.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[rstest]
    fn test_permutation_key_keeps_selection_order() {
        let input = ['a', 'b', 'c'];
        let arena = IdentityOrderedElement::wrap_all(&input);
        let selection: Selection<'_, char> = [arena[2], arena[0]].into_iter().collect();

        let key = ResultShape::Permutation.canonical_key(&selection);
        let identities: Vec<usize> = key.iter().map(IdentityOrderedElement::identity).collect();
        assert_eq!(identities, vec![2, 0]);
    }

    #[rstest]
    fn test_representatives_point_at_first_equal_value() {
        let input = ["ab", "cd", "ab", "cd", "ef"];
        let engine = CombinatoricEngine::new(&input, ResultShape::Combination, OrderingPolicy::natural());
        assert_eq!(engine.representatives(), vec![0, 1, 0, 1, 4]);
    }

    #[rstest]
    fn test_combination_rendering_is_value_sorted() {
        let input = [3, 1, 2];
        let engine = CombinatoricEngine::new(&input, ResultShape::Combination, OrderingPolicy::natural());
        let selection: Vec<_> = engine.arena.clone();
        assert_eq!(
            engine.render(&selection, &engine.representatives()).unwrap(),
            vec![1, 2, 3]
        );
    }

    #[rstest]
    fn test_combination_rendering_ignores_pick_order_on_policy_ties() {
        let input = ["ab", "cd", "ab"];
        let by_length = OrderingPolicy::by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
        let engine = CombinatoricEngine::new(&input, ResultShape::Combination, by_length);
        let representatives = engine.representatives();

        let first = engine.render(&[engine.arena[0], engine.arena[1]], &representatives).unwrap();
        let second = engine.render(&[engine.arena[1], engine.arena[2]], &representatives).unwrap();
        assert_eq!(first, vec!["ab", "cd"]);
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_permutation_rendering_keeps_selection_order() {
        let input = [3, 1, 2];
        let engine = CombinatoricEngine::new(&input, ResultShape::Permutation, OrderingPolicy::unresolved());
        let selection: Vec<_> = engine.arena.clone();
        assert_eq!(
            engine.render(&selection, &engine.representatives()).unwrap(),
            vec![3, 1, 2]
        );
    }

    #[rstest]
    fn test_negative_size_is_invalid_argument() {
        let input = [1, 2];
        let engine = CombinatoricEngine::new(&input, ResultShape::Combination, OrderingPolicy::natural());
        assert!(matches!(
            engine.generate(-1),
            Err(Error::InvalidArgument { name: "r", value: -1 })
        ));
    }

    #[rstest]
    fn test_combination_under_unresolved_policy_fails() {
        let input = [1, 2];
        let engine = CombinatoricEngine::new(&input, ResultShape::Combination, OrderingPolicy::unresolved());
        assert!(matches!(engine.generate(2), Err(Error::UnorderedElement)));
        assert_eq!(engine.generate(1).unwrap().len(), 2);
    }

    #[rstest]
    fn test_input_is_not_mutated() {
        let input = vec![2, 1, 2];
        let engine = CombinatoricEngine::new(&input, ResultShape::Permutation, OrderingPolicy::natural());
        let _ = engine.generate(3).unwrap();
        assert_eq!(input, vec![2, 1, 2]);
        assert_eq!(engine.shape(), ResultShape::Permutation);
    }
}
