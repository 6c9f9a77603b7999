//! Self-ordering containers.
//!
//! - [`OrderingPolicy`]: how elements are compared (natural, comparator, or
//!   unresolved)
//! - [`SortedSequence`]: a duplicate-permitting vector kept sorted under its
//!   policy
//!
//! # Examples
//!
//! ```rust
//! use combinix::sorted::{OrderingPolicy, SortedSequence};
//!
//! let mut by_length = SortedSequence::with_policy(OrderingPolicy::by(
//!     |left: &&str, right: &&str| left.len().cmp(&right.len()),
//! ));
//! by_length.insert_all(["ccc", "a", "bb"]).unwrap();
//! assert_eq!(by_length.as_slice(), &["a", "bb", "ccc"]);
//! ```

mod policy;
mod sequence;

pub use policy::OrderingPolicy;
pub use sequence::SortedSequence;
