//! Factorials, permutations, and combinations.
//!
//! Exact variants work in `u64` and return `None` on overflow instead of
//! wrapping. Log-space variants go through [`ln_gamma`] and stay usable
//! far beyond `u64` range.

use crate::special::ln_gamma;

/// Exact `n!`. Returns `None` if the result overflows `u64` (`n > 20`).
///
/// # Examples
/// ```
/// use u_numkit::combinatorics::factorial;
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1_u64, |acc, i| acc.checked_mul(i))
}

/// Number of ordered arrangements of `r` items out of `n`, `n! / (n − r)!`.
///
/// Returns `Some(0)` when `r > n` and `None` on overflow.
///
/// # Examples
/// ```
/// use u_numkit::combinatorics::permutations;
/// assert_eq!(permutations(5, 2), Some(20));
/// assert_eq!(permutations(5, 0), Some(1));
/// assert_eq!(permutations(2, 5), Some(0));
/// ```
pub fn permutations(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    (0..r).try_fold(1_u64, |acc, i| acc.checked_mul(n - i))
}

/// Number of unordered selections of `r` items out of `n`,
/// `n! / (r! · (n − r)!)`.
///
/// Builds the result as the running product `C(n, i+1) = C(n, i)·(n−i)/(i+1)`
/// over `min(r, n − r)` steps; every intermediate value is itself a binomial
/// coefficient, so the division is exact. Returns `Some(0)` when `r > n` and
/// `None` on overflow.
///
/// # Examples
/// ```
/// use u_numkit::combinatorics::combinations;
/// assert_eq!(combinations(5, 2), Some(10));
/// assert_eq!(combinations(52, 5), Some(2_598_960));
/// assert_eq!(combinations(3, 7), Some(0));
/// ```
pub fn combinations(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    let mut acc: u128 = 1;
    for i in 0..r {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(acc).ok()
}

/// `ln(n!)`.
pub fn ln_factorial(n: u64) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// `ln(n! / (n − r)!)`; `None` if `r > n`.
pub fn ln_permutations(n: u64, r: u64) -> Option<f64> {
    if r > n {
        return None;
    }
    Some(ln_factorial(n) - ln_factorial(n - r))
}

/// `ln C(n, r)`; `None` if `r > n`.
///
/// # Examples
/// ```
/// use u_numkit::combinatorics::ln_combinations;
/// let exact = 2_598_960_f64.ln();
/// assert!((ln_combinations(52, 5).unwrap() - exact).abs() < 1e-9);
/// ```
pub fn ln_combinations(n: u64, r: u64) -> Option<f64> {
    if r > n {
        return None;
    }
    Some(ln_factorial(n) - ln_factorial(r) - ln_factorial(n - r))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn combinations_symmetric(n in 0_u64..60, r in 0_u64..60) {
            prop_assume!(r <= n);
            prop_assert_eq!(combinations(n, r), combinations(n, n - r));
        }

        #[test]
        fn permutations_are_combinations_times_arrangements(n in 0_u64..20, r in 0_u64..20) {
            prop_assume!(r <= n);
            let p = permutations(n, r).unwrap();
            let c = combinations(n, r).unwrap();
            prop_assert_eq!(p, c * factorial(r).unwrap());
        }

        #[test]
        fn pascal_rule(n in 1_u64..60, r in 1_u64..60) {
            prop_assume!(r <= n);
            let lhs = combinations(n, r).unwrap();
            let rhs = combinations(n - 1, r - 1).unwrap() + combinations(n - 1, r).unwrap();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
