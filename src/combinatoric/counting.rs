//! Checked counting helpers.
//!
//! These compute sizes in closed form without enumerating anything. Every
//! helper fails with [`Error::Overflow`] instead of wrapping.

use crate::error::{Error, Result};

/// Computes `n!` in the range of `i32`.
///
/// The product is accumulated in `i64` and checked against `i32::MAX` after
/// every step.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is negative and
/// [`Error::Overflow`] if the result does not fit in `i32` (from `13!` on).
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// assert!(factorial(13).is_err());
/// ```
pub fn factorial(n: i32) -> Result<i32> {
    if n < 0 {
        return Err(Error::InvalidArgument {
            name: "n",
            value: i64::from(n),
        });
    }

    let mut product: i64 = 1;
    for factor in 2..=i64::from(n) {
        product *= factor;
        if product > i64::from(i32::MAX) {
            return Err(Error::Overflow {
                operation: "factorial",
                input: i64::from(n),
            });
        }
    }

    i32::try_from(product).map_err(|_| Error::Overflow {
        operation: "factorial",
        input: i64::from(n),
    })
}

/// Computes the binomial coefficient `C(n, r)`.
///
/// Returns `0` when `r > n`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` or `r` is negative and
/// [`Error::Overflow`] if the result does not fit in `u64`.
///
/// # Examples
///
/// ```rust
/// use combinix::combinatoric::binomial;
///
/// assert_eq!(binomial(9, 4).unwrap(), 126);
/// assert_eq!(binomial(3, 5).unwrap(), 0);
/// ```
pub fn binomial(n: i64, r: i64) -> Result<u64> {
    let (n, r) = non_negative_pair(n, r)?;
    if r > n {
        return Ok(0);
    }

    let overflow = || Error::Overflow {
        operation: "binomial",
        input: i64::try_from(n).unwrap_or(i64::MAX),
    };

    // Each partial product is itself a binomial coefficient, so the division
    // is exact.
    let smaller = r.min(n - r);
    let mut result: u128 = 1;
    for step in 0..smaller {
        result = result
            .checked_mul(u128::from(n - step))
            .ok_or_else(overflow)?
            / u128::from(step + 1);
    }

    u64::try_from(result).map_err(|_| overflow())
}

/// Computes the number of ordered selections `n! / (n - r)!`.
///
/// Returns `0` when `r > n`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` or `r` is negative and
/// [`Error::Overflow`] if the result does not fit in `u64`.
pub fn permutation_count(n: i64, r: i64) -> Result<u64> {
    let (n, r) = non_negative_pair(n, r)?;
    if r > n {
        return Ok(0);
    }

    (n - r + 1..=n).try_fold(1_u64, |product, factor| {
        product.checked_mul(factor).ok_or(Error::Overflow {
            operation: "permutation_count",
            input: i64::try_from(n).unwrap_or(i64::MAX),
        })
    })
}

fn non_negative_pair(n: i64, r: i64) -> Result<(u64, u64)> {
    let n = u64::try_from(n).map_err(|_| Error::InvalidArgument { name: "n", value: n })?;
    let r = u64::try_from(r).map_err(|_| Error::InvalidArgument { name: "r", value: r })?;
    Ok((n, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(9, 362_880)]
    #[case(12, 479_001_600)]
    fn test_factorial_values(#[case] n: i32, #[case] expected: i32) {
        assert_eq!(factorial(n).unwrap(), expected);
    }

    #[rstest]
    fn test_factorial_negative_is_invalid_argument() {
        assert!(matches!(
            factorial(-1),
            Err(Error::InvalidArgument { name: "n", value: -1 })
        ));
    }

    #[rstest]
    #[case(13)]
    #[case(20)]
    #[case(i32::MAX)]
    fn test_factorial_overflow(#[case] n: i32) {
        assert!(matches!(
            factorial(n),
            Err(Error::Overflow {
                operation: "factorial",
                ..
            })
        ));
    }

    #[rstest]
    #[case(9, 0, 1)]
    #[case(9, 1, 9)]
    #[case(9, 4, 126)]
    #[case(9, 9, 1)]
    #[case(5, 6, 0)]
    #[case(20, 10, 184_756)]
    #[case(52, 5, 2_598_960)]
    fn test_binomial_values(#[case] n: i64, #[case] r: i64, #[case] expected: u64) {
        assert_eq!(binomial(n, r).unwrap(), expected);
    }

    #[rstest]
    fn test_binomial_overflow() {
        assert!(matches!(binomial(100, 50), Err(Error::Overflow { .. })));
    }

    #[rstest]
    #[case(8, 0, 1)]
    #[case(8, 3, 336)]
    #[case(8, 8, 40_320)]
    #[case(8, 9, 0)]
    fn test_permutation_count_values(#[case] n: i64, #[case] r: i64, #[case] expected: u64) {
        assert_eq!(permutation_count(n, r).unwrap(), expected);
    }

    #[rstest]
    fn test_counting_rejects_negative_arguments() {
        assert!(matches!(
            binomial(-3, 1),
            Err(Error::InvalidArgument { name: "n", .. })
        ));
        assert!(matches!(
            permutation_count(3, -1),
            Err(Error::InvalidArgument { name: "r", .. })
        ));
        assert!(matches!(permutation_count(30, 30), Err(Error::Overflow { .. })));
    }
}
