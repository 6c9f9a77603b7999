//! Elements that order by value but compare equal only to themselves.
//!
//! # Identity and value
//!
//! [`IdentityOrderedElement`] carries two notions of sameness on purpose:
//!
//! - **Equality and hashing** use the identity token only. Two wrappers around
//!   equal values are still different wrappers, so a selection such as
//!   `{red₁, red₂}` holds two members instead of collapsing to one.
//! - **Ordering** delegates to the wrapped value through an
//!   [`OrderingPolicy`], so `red₁` and `red₂` compare `Equal`.
//!
//! Because the two disagree, the wrapper implements neither [`PartialOrd`] nor
//! [`Ord`]. Ordering is always requested explicitly through
//! [`IdentityOrderedElement::compare`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::sorted::OrderingPolicy;

/// A borrowed source value tagged with a per-call identity.
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::IdentityOrderedElement;
/// use combinix::sorted::OrderingPolicy;
/// use std::cmp::Ordering;
///
/// let input = ['r', 'r'];
/// let wrapped = IdentityOrderedElement::wrap_all(&input);
///
/// assert_ne!(wrapped[0], wrapped[1]);
/// assert_eq!(
///     wrapped[0].compare(&wrapped[1], &OrderingPolicy::natural()).unwrap(),
///     Ordering::Equal
/// );
/// ```
pub struct IdentityOrderedElement<'a, T> {
    identity: usize,
    value: &'a T,
}

static_assertions::assert_impl_all!(IdentityOrderedElement<'static, String>: Copy, Eq, Hash);
static_assertions::assert_not_impl_any!(IdentityOrderedElement<'static, i32>: PartialOrd);

impl<'a, T> IdentityOrderedElement<'a, T> {
    /// Wraps `value` under `identity`.
    #[inline]
    pub const fn new(identity: usize, value: &'a T) -> Self {
        Self { identity, value }
    }

    /// Wraps every element of `values`, using its position as identity.
    pub fn wrap_all(values: &'a [T]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(identity, value)| Self::new(identity, value))
            .collect()
    }

    /// Returns the identity token.
    #[inline]
    pub const fn identity(&self) -> usize {
        self.identity
    }

    /// Returns the wrapped value.
    #[inline]
    pub const fn value(&self) -> &'a T {
        self.value
    }

    /// Compares the wrapped values under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedElement`](crate::Error::UnorderedElement) if
    /// the policy is unresolved.
    #[inline]
    pub fn compare(&self, other: &Self, policy: &OrderingPolicy<T>) -> Result<Ordering> {
        policy.compare(self.value, other.value)
    }
}

impl<T> Clone for IdentityOrderedElement<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IdentityOrderedElement<'_, T> {}

impl<T> PartialEq for IdentityOrderedElement<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl<T> Eq for IdentityOrderedElement<'_, T> {}

impl<T> Hash for IdentityOrderedElement<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for IdentityOrderedElement<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}:{:?}", self.identity, self.value)
    }
}
