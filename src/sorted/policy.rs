//! Ordering policies bound to sorted containers.
//!
//! An [`OrderingPolicy`] is resolved once, when a container is built, and
//! never changes afterwards. It is one of:
//!
//! - the element type's natural [`Ord`] implementation ([`OrderingPolicy::natural`]),
//! - an injected comparator ([`OrderingPolicy::by`]),
//! - no ordering at all ([`OrderingPolicy::unresolved`]).
//!
//! The last form exists for element types without an intrinsic ordering.
//! Containers bound to it still accept a first element, and fail with
//! [`Error::UnorderedElement`] as soon as a comparison is attempted.
//!
//! # Examples
//!
//! ```rust
//! use combinix::sorted::OrderingPolicy;
//! use std::cmp::Ordering;
//!
//! let natural = OrderingPolicy::<i32>::natural();
//! assert_eq!(natural.compare(&1, &2).unwrap(), Ordering::Less);
//!
//! let descending = OrderingPolicy::by(|left: &i32, right: &i32| right.cmp(left));
//! assert_eq!(descending.compare(&1, &2).unwrap(), Ordering::Greater);
//!
//! let unresolved = OrderingPolicy::<i32>::unresolved();
//! assert!(unresolved.compare(&1, &2).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used to share comparators.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc` and comparators
/// must be `Send + Sync`. Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
type SharedComparator<T> = ReferenceCounter<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

#[cfg(not(feature = "arc"))]
type SharedComparator<T> = ReferenceCounter<dyn Fn(&T, &T) -> Ordering>;

/// Borrowed comparison function handed out by [`OrderingPolicy::resolve`].
pub(crate) type Comparison<'a, T> = &'a dyn Fn(&T, &T) -> Ordering;

enum Resolution<T> {
    Natural(fn(&T, &T) -> Ordering),
    Comparator(SharedComparator<T>),
    Unresolved,
}

/// How two elements of a sorted container are compared.
///
/// Cloning a policy is cheap: comparators are shared through a reference
/// counter.
pub struct OrderingPolicy<T> {
    resolution: Resolution<T>,
}

impl<T: Ord> OrderingPolicy<T> {
    /// Creates a policy that uses the natural ordering of `T`.
    #[inline]
    pub fn natural() -> Self {
        Self {
            resolution: Resolution::Natural(T::cmp),
        }
    }
}

impl<T> OrderingPolicy<T> {
    /// Creates a policy from an explicit comparator.
    ///
    /// The comparator must be a total order over the values it will see. It
    /// may tie values that are not equal; sorted containers then keep such
    /// values in insertion order.
    #[cfg(not(feature = "arc"))]
    pub fn by<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            resolution: Resolution::Comparator(ReferenceCounter::new(comparator)),
        }
    }

    /// Creates a policy from an explicit comparator.
    ///
    /// The comparator must be a total order over the values it will see. It
    /// may tie values that are not equal; sorted containers then keep such
    /// values in insertion order.
    #[cfg(feature = "arc")]
    pub fn by<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            resolution: Resolution::Comparator(ReferenceCounter::new(comparator)),
        }
    }

    /// Creates a policy with no ordering available.
    ///
    /// Every comparison under this policy fails with [`Error::UnorderedElement`].
    #[inline]
    pub const fn unresolved() -> Self {
        Self {
            resolution: Resolution::Unresolved,
        }
    }

    /// Returns `true` if comparisons under this policy can succeed.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self.resolution, Resolution::Unresolved)
    }

    /// Compares two elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedElement`] if the policy is unresolved.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Result<Ordering> {
        self.resolve().map(|comparison| comparison(left, right))
    }

    /// Resolves the policy to a plain comparison function.
    ///
    /// Callers that compare many pairs (sorting, merging) resolve once and then
    /// compare infallibly.
    pub(crate) fn resolve(&self) -> Result<Comparison<'_, T>> {
        match &self.resolution {
            Resolution::Natural(function) => Ok(function as Comparison<'_, T>),
            Resolution::Comparator(comparator) => Ok(comparator.as_ref() as Comparison<'_, T>),
            Resolution::Unresolved => Err(Error::UnorderedElement),
        }
    }

    const fn kind(&self) -> &'static str {
        match self.resolution {
            Resolution::Natural(_) => "Natural",
            Resolution::Comparator(_) => "Comparator",
            Resolution::Unresolved => "Unresolved",
        }
    }
}

impl<T> Clone for OrderingPolicy<T> {
    fn clone(&self) -> Self {
        let resolution = match &self.resolution {
            Resolution::Natural(function) => Resolution::Natural(*function),
            Resolution::Comparator(comparator) => {
                Resolution::Comparator(ReferenceCounter::clone(comparator))
            }
            Resolution::Unresolved => Resolution::Unresolved,
        };
        Self { resolution }
    }
}

impl<T> fmt::Debug for OrderingPolicy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "OrderingPolicy::{}", self.kind())
    }
}
