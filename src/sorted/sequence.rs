//! A vector that keeps itself sorted.
//!
//! [`SortedSequence`] permits duplicates and rejects absent values. Its
//! ordering comes from an [`OrderingPolicy`] fixed at construction.
//!
//! # Time Complexity
//!
//! | Operation      | Comparisons       | Moves         |
//! |----------------|-------------------|---------------|
//! | `insert`       | O(log n)          | O(n)          |
//! | `insert_all`   | O(m log m + n)    | O(n + m)      |
//! | `contains`     | O(log n)          | -             |
//! | `from_vec`     | O(n log n)        | O(n)          |
//!
//! Single inserts binary-search the insertion point. Bulk inserts sort the
//! incoming batch and merge it with the current contents in one pass.
//!
//! # Examples
//!
//! ```rust
//! use combinix::sorted::SortedSequence;
//!
//! let mut sequence = SortedSequence::new();
//! for element in [-10, 5, 4, 3, 7, 3] {
//!     sequence.insert(element).unwrap();
//! }
//! assert_eq!(sequence.as_slice(), &[-10, 3, 3, 4, 5, 7]);
//!
//! assert!(sequence.insert_all([-44, 8, 8, 3, 6]).unwrap());
//! assert_eq!(
//!     sequence.as_slice(),
//!     &[-44, -10, 3, 3, 3, 4, 5, 6, 7, 8, 8]
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::policy::{Comparison, OrderingPolicy};
use crate::error::{Error, Result};

/// An ordered, duplicate-permitting sequence.
///
/// Elements only enter through [`insert`](Self::insert),
/// [`insert_all`](Self::insert_all) and their `Option`-taking counterparts.
/// There is no positional insertion and no mutable access to the storage, so
/// the sequence is sorted under its policy at every observable point.
///
/// Equality and hashing look at the elements only, not at the policy.
pub struct SortedSequence<T> {
    elements: Vec<T>,
    policy: OrderingPolicy<T>,
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SortedSequence<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedSequence<i32>: Send, Sync);

impl<T: Ord> SortedSequence<T> {
    /// Creates an empty sequence ordered by the natural ordering of `T`.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(OrderingPolicy::natural())
    }

    /// Creates a sequence from a batch, sorting it up front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinix::sorted::SortedSequence;
    ///
    /// let sequence = SortedSequence::from_vec(vec![3, 1, 2]);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn from_vec(mut elements: Vec<T>) -> Self {
        elements.sort();
        Self {
            elements,
            policy: OrderingPolicy::natural(),
        }
    }
}

impl<T> SortedSequence<T> {
    /// Creates an empty sequence bound to `policy`.
    #[inline]
    pub const fn with_policy(policy: OrderingPolicy<T>) -> Self {
        Self {
            elements: Vec::new(),
            policy,
        }
    }

    /// Creates a sequence from a batch bound to `policy`, sorting it up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedElement`] if the batch has more than one
    /// element and `policy` is unresolved.
    pub fn from_vec_with_policy(policy: OrderingPolicy<T>, mut elements: Vec<T>) -> Result<Self> {
        if elements.len() > 1 {
            let comparison = policy.resolve()?;
            elements.sort_by(|left, right| comparison(left, right));
        }
        Ok(Self { elements, policy })
    }

    /// Returns the policy this sequence is ordered by.
    #[inline]
    pub const fn policy(&self) -> &OrderingPolicy<T> {
        &self.policy
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index` in sorted order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the sequence and returns its elements in sorted order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns `true` if an element comparing equal to `element` is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedElement`] if the sequence is non-empty and its
    /// policy is unresolved.
    pub fn contains(&self, element: &T) -> Result<bool> {
        if self.elements.is_empty() {
            return Ok(false);
        }
        let comparison = self.policy.resolve()?;
        Ok(self
            .elements
            .binary_search_by(|probe| comparison(probe, element))
            .is_ok())
    }

    /// Inserts one element at its sorted position.
    ///
    /// Equal elements are kept; the new element is placed next to its equal
    /// peers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedElement`] if a comparison is needed and the
    /// policy is unresolved. The sequence is unchanged on error.
    #[inline]
    pub fn insert(&mut self, element: T) -> Result<()> {
        self.try_insert(Some(element))
    }

    /// Inserts an element that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] for `None`, and
    /// [`Error::UnorderedElement`] if a comparison is needed and the policy is
    /// unresolved. The sequence is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinix::{Error, sorted::SortedSequence};
    ///
    /// let mut sequence = SortedSequence::from_vec(vec![1, 2]);
    /// assert!(matches!(sequence.try_insert(None), Err(Error::InvalidElement)));
    /// assert_eq!(sequence.as_slice(), &[1, 2]);
    /// ```
    pub fn try_insert(&mut self, element: Option<T>) -> Result<()> {
        let element = element.ok_or(Error::InvalidElement)?;
        if self.elements.is_empty() {
            self.elements.push(element);
            return Ok(());
        }
        let index = self.insertion_point(&element)?;
        self.elements.insert(index, element);
        Ok(())
    }

    /// Inserts a batch of elements.
    ///
    /// Returns `Ok(false)` and leaves the sequence untouched when the batch is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedElement`] if a comparison is needed and the
    /// policy is unresolved. The sequence is unchanged on error.
    #[inline]
    pub fn insert_all<I>(&mut self, elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        self.try_insert_all(Some(elements.into_iter().map(Some)))
    }

    /// Inserts a batch that may be absent or contain absent elements.
    ///
    /// The batch is copied, sorted under the policy, and merged with the
    /// current contents. On ties the elements already present come first.
    /// Either the whole batch is inserted or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] if any element of the batch is `None`,
    /// and [`Error::UnorderedElement`] if a comparison is needed and the policy
    /// is unresolved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinix::sorted::SortedSequence;
    ///
    /// let mut sequence = SortedSequence::from_vec(vec![-10, 5, 4, 3, 7, 3]);
    /// assert!(!sequence.try_insert_all::<Vec<Option<i32>>>(None).unwrap());
    /// assert!(sequence.try_insert_all(Some(vec![Some(1), None])).is_err());
    /// assert_eq!(sequence.as_slice(), &[-10, 3, 3, 4, 5, 7]);
    /// ```
    pub fn try_insert_all<I>(&mut self, elements: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let Some(elements) = elements else {
            return Ok(false);
        };
        let mut batch = elements
            .into_iter()
            .collect::<Option<Vec<T>>>()
            .ok_or(Error::InvalidElement)?;
        if batch.is_empty() {
            return Ok(false);
        }
        if self.elements.is_empty() && batch.len() == 1 {
            self.elements = batch;
            return Ok(true);
        }

        let comparison = self.policy.resolve()?;
        batch.sort_by(|left, right| comparison(left, right));
        let existing = std::mem::take(&mut self.elements);
        self.elements = merge_runs(existing, batch, comparison);
        Ok(true)
    }

    /// Positional insertion is not supported.
    ///
    /// Inserting at an arbitrary index could break the ordering, so this
    /// always fails and leaves the sequence untouched.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedOperation`].
    #[allow(clippy::needless_pass_by_value, clippy::unused_self)]
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        let _ = (index, element);
        Err(Error::UnsupportedOperation {
            operation: "insert_at",
        })
    }

    /// Positional batch insertion is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedOperation`].
    #[allow(clippy::needless_pass_by_value, clippy::unused_self)]
    pub fn insert_all_at<I>(&mut self, index: usize, elements: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let _ = (index, elements);
        Err(Error::UnsupportedOperation {
            operation: "insert_all_at",
        })
    }

    /// Binary search for the position of `candidate`.
    ///
    /// Stops at the first midpoint that compares equal and returns the slot
    /// right after it.
    fn insertion_point(&self, candidate: &T) -> Result<usize> {
        let comparison = self.policy.resolve()?;
        let mut low = 0;
        let mut high = self.elements.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match comparison(candidate, &self.elements[middle]) {
                Ordering::Less => high = middle,
                Ordering::Greater => low = middle + 1,
                Ordering::Equal => return Ok(middle + 1),
            }
        }
        Ok(low)
    }
}

/// Merges two sorted runs into one.
///
/// Standard two-pointer merge. On ties the element from `existing` is taken
/// first, so previously inserted elements keep their relative order ahead of
/// equal newcomers.
fn merge_runs<T>(existing: Vec<T>, incoming: Vec<T>, comparison: Comparison<'_, T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    let mut existing = existing.into_iter().peekable();
    let mut incoming = incoming.into_iter().peekable();

    loop {
        let take_existing = match (existing.peek(), incoming.peek()) {
            (Some(left), Some(right)) => comparison(left, right) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_existing {
            existing.next()
        } else {
            incoming.next()
        };
        merged.extend(next);
    }

    merged
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Ord> Default for SortedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SortedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for SortedSequence<T> {}

impl<T: Hash> Hash for SortedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedSequence")
            .field("elements", &self.elements)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: Ord> FromIterator<T> for SortedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for SortedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for SortedSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSequence<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSequence<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
