//! # combinix
//!
//! Self-ordering sequences and duplicate-aware enumeration of combinations and
//! permutations.
//!
//! ## Overview
//!
//! - **Sorted sequences**: [`SortedSequence`](sorted::SortedSequence) keeps its
//!   elements sorted under an [`OrderingPolicy`](sorted::OrderingPolicy) fixed
//!   at construction, with binary-search single inserts and merge-based bulk
//!   inserts.
//! - **Combinatorics**: [`combinations`](combinatoric::combinations) and
//!   [`permutations`](combinatoric::permutations) enumerate every distinct group
//!   of `r` values drawn from a multiset, so `[r, r, b, b, b]` choose 2 yields
//!   exactly `{[b, b], [b, r], [r, r]}`.
//! - **Text**: helpers that read a stream into a string or a list of lines.
//!
//! ## Feature Flags
//!
//! - `sorted`: Sorted sequences and ordering policies
//! - `combinatoric`: Combination and permutation engine (implies `sorted`)
//! - `text`: Text-stream helpers
//! - `serde`: `Serialize`/`Deserialize` for sorted sequences and result sets
//! - `arc`: Share comparators through `Arc` so sequences are `Send + Sync`
//! - `fxhash`: Use `rustc-hash` for result deduplication
//! - `full`: Enable `sorted`, `combinatoric`, `text` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use combinix::prelude::*;
//!
//! let mut sequence = SortedSequence::new();
//! sequence.insert_all([5, 1, 3]).unwrap();
//! assert_eq!(sequence.as_slice(), &[1, 3, 5]);
//!
//! let groups = combinations(&['r', 'r', 'b', 'b', 'b'], 2).unwrap();
//! assert_eq!(groups.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use combinix::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;

    #[cfg(feature = "sorted")]
    pub use crate::sorted::*;

    #[cfg(feature = "combinatoric")]
    pub use crate::combinatoric::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

mod error;

pub use error::{Error, Result};

#[cfg(feature = "sorted")]
pub mod sorted;

#[cfg(feature = "combinatoric")]
pub mod combinatoric;

#[cfg(feature = "text")]
pub mod text;
