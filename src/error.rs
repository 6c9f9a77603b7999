//! Error types shared by every module of the crate.
//!
//! All fallible operations report a single [`Error`] synchronously to the
//! caller. Nothing is retried internally: every operation here is pure and
//! deterministic, so a retry would only reproduce the same failure. A failed
//! operation never leaves a container partially modified.

use thiserror::Error;

/// Errors produced by sorted sequences, the combinatoric engine and the
/// counting helpers.
///
/// # Examples
///
/// ```rust
/// use combinix::Error;
///
/// let error = Error::InvalidArgument { name: "r", value: -1 };
/// assert_eq!(format!("{error}"), "invalid argument `r`: -1 must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// An absent value was passed to an insertion operation.
    #[error("invalid element: absent values cannot be inserted into a sorted sequence")]
    InvalidElement,

    /// A size argument was negative.
    #[error("invalid argument `{name}`: {value} must not be negative")]
    InvalidArgument {
        /// The name of the rejected argument.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A comparison was attempted without a comparator and without a
    /// natural ordering bound to the container.
    #[error("unordered element: no comparator or natural ordering is available")]
    UnorderedElement,

    /// Checked arithmetic exceeded the range of its result type.
    #[error("overflow: {operation}({input}) exceeds the representable range")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
        /// The input that caused the overflow.
        input: i64,
    },

    /// The operation would break the invariants of the receiver.
    #[error("unsupported operation `{operation}` on a sorted sequence")]
    UnsupportedOperation {
        /// The name of the rejected operation.
        operation: &'static str,
    },

    /// Reading from a text stream failed.
    #[error("failed to read text stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_element_display() {
        assert_eq!(
            format!("{}", Error::InvalidElement),
            "invalid element: absent values cannot be inserted into a sorted sequence"
        );
    }

    #[rstest]
    fn test_overflow_display_names_operation_and_input() {
        let error = Error::Overflow {
            operation: "factorial",
            input: 13,
        };
        assert_eq!(
            format!("{error}"),
            "overflow: factorial(13) exceeds the representable range"
        );
    }

    #[rstest]
    fn test_unsupported_operation_display() {
        let error = Error::UnsupportedOperation {
            operation: "insert_at",
        };
        assert_eq!(
            format!("{error}"),
            "unsupported operation `insert_at` on a sorted sequence"
        );
    }

    #[rstest]
    fn test_io_error_converts_into_error() {
        let error = Error::from(std::io::Error::other("boom"));
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(format!("{error}"), "failed to read text stream: boom");
    }
}
