//! Bivariate statistics over paired samples.
//!
//! Both slices of a pair must have the same length; a mismatch is treated
//! as invalid input and yields `None`, as do empty input and NaN/Inf
//! values.

use crate::stats::{all_finite, kahan_sum};

/// Population covariance, `Σ(xᵢ − x̄)(yᵢ − ȳ) / n`.
///
/// # Returns
/// - `None` if `x.len() != y.len()`, the slices are empty, or contain NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::regression::covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((covariance(&x, &y).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    let (sxy, n) = co_moment(x, y)?;
    Some(sxy / n as f64)
}

/// Sample covariance with Bessel's correction (denominator `n − 1`).
///
/// # Returns
/// - `None` if `x.len() != y.len()`, `n < 2`, or data contains NaN/Inf.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    let (sxy, n) = co_moment(x, y)?;
    if n < 2 {
        return None;
    }
    Some(sxy / (n - 1) as f64)
}

/// Pearson correlation coefficient, `cov(x, y) / (σx · σy)`.
///
/// The result is not clamped, so rounding may push it a hair outside
/// `[-1, 1]`.
///
/// # Returns
/// - `None` if the inputs are mismatched, empty, non-finite, or either
///   sequence is constant.
///
/// # Examples
/// ```
/// use u_numkit::regression::correlation;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((correlation(&x, &[5.0, 4.0, 3.0, 2.0, 1.0]).unwrap() + 1.0).abs() < 1e-12);
/// assert_eq!(correlation(&x, &[3.0; 5]), None);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let (sxy, _) = co_moment(x, y)?;
    let sxx = centered_sum_of_squares(x);
    let syy = centered_sum_of_squares(y);
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    // the 1/n factors cancel
    Some(sxy / (sxx.sqrt() * syy.sqrt()))
}

/// Ordinary least squares fit `y ≈ intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits a straight line by ordinary least squares.
///
/// # Formula
/// ```text
/// slope     = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²
/// intercept = ȳ − slope · x̄
/// ```
///
/// # Returns
/// - `None` if the inputs are mismatched, `n < 2`, non-finite, or all `x`
///   are equal.
///
/// # Examples
/// ```
/// use u_numkit::regression::linear_regression;
/// let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!(fit.intercept.abs() < 1e-12);
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let (sxy, n) = co_moment(x, y)?;
    if n < 2 {
        return None;
    }
    let sxx = centered_sum_of_squares(x);
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    let mean_x = kahan_sum(x) / n as f64;
    let mean_y = kahan_sum(y) / n as f64;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Coefficient of determination of the OLS fit, `1 − SS_res / SS_tot`.
///
/// # Returns
/// - `None` whenever [`linear_regression`] does, or when `y` is constant.
///
/// # Examples
/// ```
/// use u_numkit::regression::r_squared;
/// let r2 = r_squared(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
/// assert!((r2 - 1.0).abs() < 1e-12);
/// ```
pub fn r_squared(x: &[f64], y: &[f64]) -> Option<f64> {
    let fit = linear_regression(x, y)?;
    let ss_tot = centered_sum_of_squares(y);
    if ss_tot == 0.0 {
        return None;
    }
    let residuals: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let r = yi - fit.predict(xi);
            r * r
        })
        .collect();
    Some(1.0 - kahan_sum(&residuals) / ss_tot)
}

/// `(Σ(xᵢ − x̄)(yᵢ − ȳ), n)` after validating the pair.
fn co_moment(x: &[f64], y: &[f64]) -> Option<(f64, usize)> {
    let n = x.len();
    if n == 0 || n != y.len() || !all_finite(x) || !all_finite(y) {
        return None;
    }
    let mean_x = kahan_sum(x) / n as f64;
    let mean_y = kahan_sum(y) / n as f64;
    let products: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .collect();
    Some((kahan_sum(&products), n))
}

fn centered_sum_of_squares(data: &[f64]) -> f64 {
    let m = kahan_sum(data) / data.len() as f64;
    let squares: Vec<f64> = data.iter().map(|&v| (v - m) * (v - m)).collect();
    kahan_sum(&squares)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    const X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const Y: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

    #[test]
    fn test_covariance() {
        assert!((covariance(&X, &Y).unwrap() - 4.0).abs() < TOL);
        assert!((sample_covariance(&X, &Y).unwrap() - 5.0).abs() < TOL);
        let rev = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((covariance(&X, &rev).unwrap() + 4.0).abs() < TOL);
    }

    #[test]
    fn test_covariance_with_itself_is_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let cov = covariance(&data, &data).unwrap();
        assert!((cov - crate::stats::variance(&data).unwrap()).abs() < TOL);
    }

    #[test]
    fn test_covariance_invalid() {
        assert_eq!(covariance(&[], &[]), None);
        assert_eq!(covariance(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(covariance(&[1.0, f64::NAN], &[1.0, 2.0]), None);
        assert_eq!(sample_covariance(&[1.0], &[2.0]), None);
        assert_eq!(covariance(&[1.0], &[2.0]), Some(0.0));
    }

    #[test]
    fn test_correlation_perfect() {
        assert!((correlation(&X, &Y).unwrap() - 1.0).abs() < TOL);
        let rev = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert!((correlation(&X, &rev).unwrap() + 1.0).abs() < TOL);
    }

    #[test]
    fn test_correlation_symmetric() {
        let a = [1.3, 2.9, 0.4, 7.7, 5.1, 3.3];
        let b = [9.2, 1.1, 4.4, 2.0, 6.6, 0.5];
        assert_eq!(correlation(&a, &b), correlation(&b, &a));
    }

    #[test]
    fn test_correlation_constant_is_none() {
        assert_eq!(correlation(&X, &[3.0; 5]), None);
        assert_eq!(correlation(&[3.0; 5], &X), None);
        assert_eq!(correlation(&X, &Y[..4]), None);
    }

    #[test]
    fn test_linear_regression() {
        let fit = linear_regression(&X, &Y).unwrap();
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!(fit.intercept.abs() < TOL);
        assert!((fit.predict(10.0) - 20.0).abs() < TOL);

        let y = [3.0, 5.0, 7.0, 9.0, 11.0];
        let fit = linear_regression(&X, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.intercept - 1.0).abs() < TOL);
    }

    #[test]
    fn test_linear_regression_degenerate() {
        assert_eq!(linear_regression(&[1.0], &[2.0]), None);
        assert_eq!(linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(linear_regression(&X, &[1.0, 2.0]), None);
    }

    #[test]
    fn test_r_squared() {
        assert!((r_squared(&X, &Y).unwrap() - 1.0).abs() < TOL);
        // y = [1, 3, 2, 5, 4]: slope 0.8, SS_res = 3.6, SS_tot = 10
        let r2 = r_squared(&X, &[1.0, 3.0, 2.0, 5.0, 4.0]).unwrap();
        assert!((r2 - 0.64).abs() < TOL);
        assert_eq!(r_squared(&X, &[4.0; 5]), None);
    }
}
