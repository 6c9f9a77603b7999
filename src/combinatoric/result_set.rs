//! Deduplicated collections of generated groups.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Hash builder used for result and working sets.
///
/// `rustc_hash::FxBuildHasher` with the `fxhash` feature, the standard
/// `RandomState` otherwise.
#[cfg(feature = "fxhash")]
pub(crate) type GroupHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
pub(crate) type GroupHasher = std::hash::RandomState;

/// A set of result groups, deduplicated by value-sequence equality.
///
/// Two groups are the same member when they hold equal values in the same
/// order. Combination groups are stored sorted, so equal multisets collapse
/// into one member; permutation groups keep selection order, so only
/// identical ordered sequences collapse.
///
/// Iteration order is unspecified. Use [`to_sorted_vec`](Self::to_sorted_vec)
/// for a deterministic listing.
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::combinations;
///
/// let groups = combinations(&['r', 'r', 'b', 'b', 'b'], 2).unwrap();
/// assert_eq!(groups.len(), 3);
/// assert!(groups.contains(&['r', 'b']));
/// assert_eq!(
///     groups.to_sorted_vec(),
///     vec![vec!['b', 'b'], vec!['b', 'r'], vec!['r', 'r']]
/// );
/// ```
pub struct ResultSet<T> {
    groups: HashSet<Vec<T>, GroupHasher>,
}

impl<T: Eq + Hash> ResultSet<T> {
    /// Creates an empty result set.
    #[inline]
    pub fn new() -> Self {
        Self {
            groups: HashSet::with_hasher(GroupHasher::default()),
        }
    }

    /// Creates an empty result set with room for `capacity` groups.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: HashSet::with_capacity_and_hasher(capacity, GroupHasher::default()),
        }
    }

    /// Adds a group. Returns `false` if an equal group was already present.
    #[inline]
    pub fn insert(&mut self, group: Vec<T>) -> bool {
        self.groups.insert(group)
    }

    /// Returns `true` if a group equal to `group` is present.
    #[inline]
    pub fn contains(&self, group: &[T]) -> bool {
        self.groups.contains(group)
    }

    /// Returns the groups ordered lexicographically.
    pub fn to_sorted_vec(&self) -> Vec<Vec<T>>
    where
        T: Ord + Clone,
    {
        let mut groups: Vec<Vec<T>> = self.groups.iter().cloned().collect();
        groups.sort();
        groups
    }
}

impl<T> ResultSet<T> {
    /// Returns the number of distinct groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns an iterator over the groups in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.groups.iter().map(Vec::as_slice)
    }
}

impl<T: Eq + Hash> Default for ResultSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ResultSet<T> {
    fn clone(&self) -> Self {
        Self {
            groups: self.groups.clone(),
        }
    }
}

impl<T: Eq + Hash> PartialEq for ResultSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<T: Eq + Hash> Eq for ResultSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ResultSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.groups.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<Vec<T>> for ResultSet<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        let mut result = Self::new();
        for group in iter {
            result.insert(group);
        }
        result
    }
}

impl<T> IntoIterator for ResultSet<T> {
    type Item = Vec<T>;
    type IntoIter = std::collections::hash_set::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ResultSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for group in &self.groups {
            seq.serialize_element(group)?;
        }
        seq.end()
    }
}
