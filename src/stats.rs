//! Descriptive and inferential statistics over numeric samples.
//!
//! Every function borrows its input immutably and returns `None` instead of
//! a sentinel when the input is empty, a parameter is out of range, the
//! statistic is degenerate (zero spread, zero total weight), or the data
//! contains NaN/Inf. Order statistics sort a private copy of the data, so
//! the caller's slice is never reordered.
//!
//! # Algorithms
//!
//! - **Sums and means**: Neumaier compensated summation ([`kahan_sum`]).
//! - **Variance**: Welford's online update, see [`MomentAccumulator`].
//!   Reference: Welford (1962), *Technometrics* 4(3).
//! - **Percentiles**: linear interpolation between the order statistics at
//!   `⌊h⌋` and `⌈h⌉`, with `h = p/100 · (n − 1)` (Hyndman & Fan type 7).
//! - **Skewness / kurtosis**: population moment ratios (no small-sample
//!   bias correction); kurtosis is reported as excess kurtosis.

use std::collections::HashMap;

/// z-value used by [`confidence_interval_95`].
const Z_95: f64 = 1.96;

// ---------------------------------------------------------------------------
// Central tendency
// ---------------------------------------------------------------------------

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the median without mutating the input.
///
/// Sorts a copy and returns the middle element, or the average of the two
/// middle elements when the length is even.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    Some(median_sorted(&sorted))
}

/// Returns the most frequent value.
///
/// When several values share the highest count, the one whose first
/// occurrence comes earliest in `data` wins. `0.0` and `-0.0` count as the
/// same value.
///
/// # Complexity
/// Time: O(n) expected, Space: O(k) for k distinct values
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::mode;
/// let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
/// assert_eq!(mode(&data), Some(4.0));
/// // tie between 7 and 3: 7 appears first
/// assert_eq!(mode(&[7.0, 3.0, 3.0, 7.0]), Some(7.0));
/// ```
pub fn mode(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    // bit pattern -> (count, index of first occurrence)
    let mut tally: HashMap<u64, (usize, usize)> = HashMap::with_capacity(data.len());
    for (i, &x) in data.iter().enumerate() {
        let key = if x == 0.0 { 0.0_f64.to_bits() } else { x.to_bits() };
        tally.entry(key).and_modify(|e| e.0 += 1).or_insert((1, i));
    }
    let (_, first) = tally
        .into_values()
        .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))?;
    Some(data[first])
}

/// Geometric mean, `(Π xᵢ)^(1/n)`, evaluated in log space to avoid
/// overflowing the product.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or any value is `<= 0`.
///
/// # Examples
/// ```
/// use u_numkit::stats::geometric_mean;
/// assert!((geometric_mean(&[2.0, 8.0]).unwrap() - 4.0).abs() < 1e-12);
/// assert_eq!(geometric_mean(&[-5.0, -3.0, 0.0, 3.0, 5.0]), None);
/// ```
pub fn geometric_mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) || data.iter().any(|&x| x <= 0.0) {
        return None;
    }
    let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();
    Some((kahan_sum(&logs) / data.len() as f64).exp())
}

/// Harmonic mean, `n / Σ(1/xᵢ)`.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf or a zero, or the
///   reciprocals cancel to zero.
///
/// # Examples
/// ```
/// use u_numkit::stats::harmonic_mean;
/// assert!((harmonic_mean(&[1.0, 2.0, 4.0]).unwrap() - 12.0 / 7.0).abs() < 1e-12);
/// ```
pub fn harmonic_mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) || data.iter().any(|&x| x == 0.0) {
        return None;
    }
    let reciprocals: Vec<f64> = data.iter().map(|x| 1.0 / x).collect();
    let denom = kahan_sum(&reciprocals);
    if denom == 0.0 {
        return None;
    }
    Some(data.len() as f64 / denom)
}

/// Root mean square, `√(Σxᵢ² / n)`.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn root_mean_square(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    let squares: Vec<f64> = data.iter().map(|x| x * x).collect();
    Some((kahan_sum(&squares) / data.len() as f64).sqrt())
}

/// Mean of the sample after discarding `⌊n · trim_percent / 100⌋` values
/// from each end of the sorted data.
///
/// If trimming would leave nothing, the untrimmed mean is returned.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or `trim_percent` is
///   outside `[0, 50)`.
///
/// # Examples
/// ```
/// use u_numkit::stats::trimmed_mean;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// // drops 1 and 10
/// assert_eq!(trimmed_mean(&data, 10.0), Some(5.5));
/// let outlier = [1.0, 2.0, 3.0, 4.0, 1000.0];
/// assert_eq!(trimmed_mean(&outlier, 20.0), Some(3.0));
/// ```
pub fn trimmed_mean(data: &[f64], trim_percent: f64) -> Option<f64> {
    if !(0.0..50.0).contains(&trim_percent) {
        log::debug!("trimmed_mean: trim percent {trim_percent} outside [0, 50)");
        return None;
    }
    let sorted = sorted_copy(data)?;
    let n = sorted.len();
    let k = (n as f64 * trim_percent / 100.0).floor() as usize;
    if 2 * k >= n {
        return Some(kahan_sum(&sorted) / n as f64);
    }
    let kept = &sorted[k..n - k];
    Some(kahan_sum(kept) / kept.len() as f64)
}

/// Weighted arithmetic mean, `Σ(vᵢ·wᵢ) / Σwᵢ`.
///
/// # Returns
/// - `None` if the slices differ in length, are empty, contain NaN/Inf,
///   any weight is negative, or the weights sum to zero.
///
/// # Examples
/// ```
/// use u_numkit::stats::weighted_mean;
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(weighted_mean(&values, &[0.0, 0.0, 1.0, 0.0, 0.0]), Some(3.0));
/// assert_eq!(weighted_mean(&values, &[0.0; 5]), None);
/// ```
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    if !all_finite(values) || !all_finite(weights) || weights.iter().any(|&w| w < 0.0) {
        return None;
    }
    let total = kahan_sum(weights);
    if total == 0.0 {
        return None;
    }
    let products: Vec<f64> = values.iter().zip(weights).map(|(v, w)| v * w).collect();
    Some(kahan_sum(&products) / total)
}

// ---------------------------------------------------------------------------
// Extremes and totals
// ---------------------------------------------------------------------------

/// Sum of all values (compensated). The sum of an empty slice is `0.0`.
pub fn sum(data: &[f64]) -> f64 {
    kahan_sum(data)
}

/// Number of observations.
pub fn count(data: &[f64]) -> usize {
    data.len()
}

/// Returns the minimum value.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// assert_eq!(min(&[1.0, f64::NEG_INFINITY]), None);
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    data.iter().copied().reduce(f64::min)
}

/// Returns the maximum value.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn max(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    data.iter().copied().reduce(f64::max)
}

/// `max − min`.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn range(data: &[f64]) -> Option<f64> {
    Some(max(data)? - min(data)?)
}

/// Running totals: `out[i] = data[0] + … + data[i]`.
///
/// Returns an empty vector for empty input.
///
/// # Examples
/// ```
/// use u_numkit::stats::cumulative_sum;
/// assert_eq!(
///     cumulative_sum(&[1.0, 2.0, 3.0, 4.0, 5.0]),
///     vec![1.0, 3.0, 6.0, 10.0, 15.0]
/// );
/// ```
pub fn cumulative_sum(data: &[f64]) -> Vec<f64> {
    data.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

/// Population variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    MomentAccumulator::from_slice(data).variance()
}

/// Sample variance with Bessel's correction (denominator `n − 1`).
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::sample_variance;
/// assert!((sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 2.5).abs() < 1e-12);
/// assert_eq!(sample_variance(&[1.0]), None);
/// ```
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    MomentAccumulator::from_slice(data).sample_variance()
}

/// Population standard deviation, `√variance`.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Sample standard deviation, `√sample_variance`.
///
/// # Examples
/// ```
/// use u_numkit::stats::sample_std_dev;
/// let sd = sample_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 1.5811388300841898).abs() < 1e-12);
/// ```
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Mean absolute deviation around the mean, `Σ|xᵢ − x̄| / n`.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean_absolute_deviation;
/// assert_eq!(mean_absolute_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(1.2));
/// ```
pub fn mean_absolute_deviation(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - m).abs()).collect();
    Some(kahan_sum(&deviations) / data.len() as f64)
}

/// Median absolute deviation around the median, `median(|xᵢ − median(x)|)`.
///
/// Not rescaled to estimate σ.
///
/// # Examples
/// ```
/// use u_numkit::stats::median_absolute_deviation;
/// let data = [1.0, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0];
/// assert_eq!(median_absolute_deviation(&data), Some(1.0));
/// ```
pub fn median_absolute_deviation(data: &[f64]) -> Option<f64> {
    let med = median(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - med).abs()).collect();
    median(&deviations)
}

/// Coefficient of variation in percent: population σ / mean × 100.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or the mean is zero.
pub fn coefficient_of_variation(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    if m == 0.0 {
        return None;
    }
    Some(std_dev(data)? / m * 100.0)
}

/// Standardizes `value` against a known mean and standard deviation.
///
/// # Returns
/// - `None` if `std_dev` is zero or any argument is NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::z_score;
/// assert_eq!(z_score(5.0, 3.0, 1.0), Some(2.0));
/// assert_eq!(z_score(5.0, 3.0, 0.0), None);
/// ```
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if !(value.is_finite() && mean.is_finite() && std_dev.is_finite()) || std_dev == 0.0 {
        return None;
    }
    Some((value - mean) / std_dev)
}

// ---------------------------------------------------------------------------
// Order statistics
// ---------------------------------------------------------------------------

/// Computes the `p`-th percentile, `p ∈ [0, 100]`.
///
/// # Algorithm
/// For sorted data `x[0..n]`, let `h = p/100 · (n − 1)`, `j = ⌊h⌋` and
/// `g = h − j`. The result is `(1 − g)·x[j] + g·x[j+1]`, or `x[j]` when `h`
/// lands on a rank. `p = 100` returns the largest value.
///
/// # Complexity
/// Time: O(n log n) (sort of a copy), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or `p` is outside
///   `[0, 100]`.
///
/// # Examples
/// ```
/// use u_numkit::stats::percentile;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&data, 50.0), Some(3.0));
/// assert_eq!(percentile(&data, 100.0), Some(5.0));
/// assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 25.0), Some(1.75));
/// ```
pub fn percentile(data: &[f64], p: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&p) {
        log::debug!("percentile: p={p} outside [0, 100]");
        return None;
    }
    let sorted = sorted_copy(data)?;
    percentile_sorted(&sorted, p)
}

/// [`percentile`] on data the caller has already sorted ascending.
///
/// Lets several order statistics share one sort.
///
/// # Returns
/// - `None` if `sorted_data` is empty or `p` is outside `[0, 100]`.
pub fn percentile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    let n = sorted_data.len();
    if n == 0 || !(0.0..=100.0).contains(&p) {
        return None;
    }
    let h = p / 100.0 * (n - 1) as f64;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if g == 0.0 || j + 1 >= n {
        Some(sorted_data[j.min(n - 1)])
    } else {
        Some((1.0 - g) * sorted_data[j] + g * sorted_data[j + 1])
    }
}

/// First quartile (25th percentile).
pub fn quartile1(data: &[f64]) -> Option<f64> {
    percentile(data, 25.0)
}

/// Third quartile (75th percentile).
pub fn quartile3(data: &[f64]) -> Option<f64> {
    percentile(data, 75.0)
}

/// Interquartile range, `quartile3 − quartile1`, from a single sort.
///
/// # Examples
/// ```
/// use u_numkit::stats::iqr;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// assert_eq!(iqr(&data), Some(3.5));
/// ```
pub fn iqr(data: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    Some(percentile_sorted(&sorted, 75.0)? - percentile_sorted(&sorted, 25.0)?)
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Population skewness: the mean of `((xᵢ − x̄)/σ)³` with population σ.
///
/// No small-sample correction is applied.
///
/// # Returns
/// - `None` if `data.len() < 3`, data contains NaN/Inf, or σ is zero.
///
/// # Examples
/// ```
/// use u_numkit::stats::skewness;
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-14);
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
/// assert_eq!(skewness(&[5.0, 5.0, 5.0]), None);
/// ```
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let (m2, m3, _) = central_moments(data)?;
    if m2 == 0.0 {
        return None;
    }
    Some(m3 / m2.powf(1.5))
}

/// Excess kurtosis: the mean of `((xᵢ − x̄)/σ)⁴` minus 3, with population σ.
///
/// A normal distribution scores 0; heavy tails score positive.
///
/// # Returns
/// - `None` if `data.len() < 4`, data contains NaN/Inf, or σ is zero.
///
/// # Examples
/// ```
/// use u_numkit::stats::kurtosis;
/// // five evenly spaced points: 1.7 − 3
/// let k = kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((k + 1.3).abs() < 1e-12);
/// ```
pub fn kurtosis(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    let (m2, _, m4) = central_moments(data)?;
    if m2 == 0.0 {
        return None;
    }
    Some(m4 / (m2 * m2) - 3.0)
}

// ---------------------------------------------------------------------------
// Inference
// ---------------------------------------------------------------------------

/// Standard error of the mean, `s / √n` with the sample standard deviation.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
pub fn standard_error(data: &[f64]) -> Option<f64> {
    Some(sample_std_dev(data)? / (data.len() as f64).sqrt())
}

/// Normal-approximation 95% confidence interval for the mean,
/// `x̄ ∓ 1.96 · SE`, as `(lower, upper)`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::confidence_interval_95;
/// let (lo, hi) = confidence_interval_95(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((lo - 1.6141).abs() < 1e-4);
/// assert!((hi - 4.3859).abs() < 1e-4);
/// ```
pub fn confidence_interval_95(data: &[f64]) -> Option<(f64, f64)> {
    interval_around_mean(data, Z_95)
}

/// Normal-approximation confidence interval for the mean at an arbitrary
/// confidence `level ∈ (0, 1)`, using `z = Φ⁻¹((1 + level) / 2)`.
///
/// # Returns
/// - `None` if `data.len() < 2`, data contains NaN/Inf, or `level` is
///   outside `(0, 1)`.
///
/// # Examples
/// ```
/// use u_numkit::stats::confidence_interval;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let (lo90, hi90) = confidence_interval(&data, 0.90).unwrap();
/// let (lo99, hi99) = confidence_interval(&data, 0.99).unwrap();
/// assert!(lo99 < lo90 && hi90 < hi99);
/// ```
pub fn confidence_interval(data: &[f64], level: f64) -> Option<(f64, f64)> {
    if !(level > 0.0 && level < 1.0) {
        log::debug!("confidence_interval: level {level} outside (0, 1)");
        return None;
    }
    let z = crate::special::inverse_normal_cdf((1.0 + level) / 2.0);
    interval_around_mean(data, z)
}

fn interval_around_mean(data: &[f64], z: f64) -> Option<(f64, f64)> {
    let se = standard_error(data)?;
    let m = mean(data)?;
    Some((m - z * se, m + z * se))
}

// ---------------------------------------------------------------------------
// Aggregate summary
// ---------------------------------------------------------------------------

/// Descriptive statistics for one sample, computed by [`describe`].
///
/// Fields that need more observations than were supplied are `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Sample variance; needs 2 observations.
    pub sample_variance: Option<f64>,
    /// Sample standard deviation; needs 2 observations.
    pub sample_std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// Needs 3 observations and non-zero spread.
    pub skewness: Option<f64>,
    /// Excess kurtosis; needs 4 observations and non-zero spread.
    pub kurtosis: Option<f64>,
}

/// Computes every summary statistic with one sort and one moment pass.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::stats::describe;
/// let s = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(s.count, 5);
/// assert_eq!(s.mean, 3.0);
/// assert_eq!(s.median, 3.0);
/// assert_eq!(s.range, 4.0);
/// assert_eq!(s.sample_variance, Some(2.5));
/// ```
pub fn describe(data: &[f64]) -> Option<Summary> {
    let sorted = sorted_copy(data)?;
    let acc = MomentAccumulator::from_slice(data);
    let n = sorted.len();

    let total = kahan_sum(data);
    let variance = acc.variance()?;
    let q1 = percentile_sorted(&sorted, 25.0)?;
    let q3 = percentile_sorted(&sorted, 75.0)?;
    let (min, max) = (sorted[0], sorted[n - 1]);

    Some(Summary {
        count: n,
        sum: total,
        mean: total / n as f64,
        median: median_sorted(&sorted),
        mode: mode(data)?,
        variance,
        std_dev: variance.sqrt(),
        sample_variance: acc.sample_variance(),
        sample_std_dev: acc.sample_std_dev(),
        min,
        max,
        range: max - min,
        q1,
        q3,
        iqr: q3 - q1,
        skewness: acc.skewness(),
        kurtosis: acc.kurtosis(),
    })
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation.
///
/// Carries the rounding error of every addition in a correction term so the
/// total error stays O(ε) regardless of `n`, including when an addend is
/// larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
///
/// # Examples
/// ```
/// use u_numkit::stats::kahan_sum;
/// // a naive left-to-right sum loses the 1.0
/// assert_eq!(kahan_sum(&[1e16, 1.0, -1e16]), 1.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let (total, correction) = data.iter().fold((0.0_f64, 0.0_f64), |(s, c), &x| {
        let t = s + x;
        let lost = if s.abs() >= x.abs() {
            (s - t) + x
        } else {
            (x - t) + s
        };
        (t, c + lost)
    });
    // an infinite total leaves a NaN correction behind
    if total.is_finite() {
        total + correction
    } else {
        total
    }
}

// ---------------------------------------------------------------------------
// Streaming moments
// ---------------------------------------------------------------------------

/// Single-pass accumulator of count, mean, and central moment sums
/// M₂, M₃, M₄.
///
/// Produces the same population statistics as the batch functions of this
/// module, and can merge partial accumulators built over disjoint chunks.
///
/// References:
/// - Welford (1962), *Technometrics* 4(3), pp. 419–420.
/// - Pébay (2008), Sandia Report SAND2008-6212 (higher moments, merging).
///
/// # Examples
/// ```
/// use u_numkit::stats::MomentAccumulator;
/// let mut acc = MomentAccumulator::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert_eq!(acc.mean(), Some(5.0));
/// assert!((acc.variance().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentAccumulator {
    n: u64,
    mu: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl MomentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an accumulator over every value of `data`.
    pub fn from_slice(data: &[f64]) -> Self {
        let mut acc = Self::new();
        for &x in data {
            acc.update(x);
        }
        acc
    }

    /// Adds one observation.
    ///
    /// Higher moments are updated before lower ones because each update
    /// reads the previous values of the lower moments.
    pub fn update(&mut self, value: f64) {
        let prev = self.n as f64;
        self.n += 1;
        if self.n == 1 {
            self.mu = value;
            return;
        }
        let n = self.n as f64;
        let delta = value - self.mu;
        let dn = delta / n;
        let dn2 = dn * dn;
        let t = delta * dn * prev;

        self.m4 += t * dn2 * (n * n - 3.0 * n + 3.0) + 6.0 * dn2 * self.m2 - 4.0 * dn * self.m3;
        self.m3 += t * dn * (n - 2.0) - 3.0 * dn * self.m2;
        self.m2 += t;
        self.mu += dn;
    }

    /// Folds `other` into `self` as if its observations had been added here.
    pub fn merge(&mut self, other: &MomentAccumulator) {
        if other.n == 0 {
            return;
        }
        if self.n == 0 {
            self.clone_from(other);
            return;
        }
        let (a, b) = (self.n as f64, other.n as f64);
        let n = a + b;
        let d = other.mu - self.mu;
        let d2 = d * d;
        let ab = a * b;

        let m2 = self.m2 + other.m2 + d2 * ab / n;
        let m3 = self.m3
            + other.m3
            + d2 * d * ab * (a - b) / (n * n)
            + 3.0 * d * (a * other.m2 - b * self.m2) / n;
        let m4 = self.m4
            + other.m4
            + d2 * d2 * ab * (a * a - ab + b * b) / (n * n * n)
            + 6.0 * d2 * (a * a * other.m2 + b * b * self.m2) / (n * n)
            + 4.0 * d * (a * other.m3 - b * self.m3) / n;

        self.n += other.n;
        self.mu += d * b / n;
        self.m2 = m2;
        self.m3 = m3;
        self.m4 = m4;
    }

    pub fn count(&self) -> u64 {
        self.n
    }

    /// Running mean; `None` before the first observation.
    pub fn mean(&self) -> Option<f64> {
        (self.n > 0).then_some(self.mu)
    }

    /// Population variance; `None` before the first observation.
    pub fn variance(&self) -> Option<f64> {
        (self.n > 0).then(|| self.m2 / self.n as f64)
    }

    /// Sample variance; `None` with fewer than 2 observations.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.n > 1).then(|| self.m2 / (self.n - 1) as f64)
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }

    /// Population skewness, `√n · M₃ / M₂^{3/2}`; needs 3 observations and
    /// non-zero spread.
    pub fn skewness(&self) -> Option<f64> {
        if self.n < 3 || self.m2 == 0.0 {
            return None;
        }
        Some((self.n as f64).sqrt() * self.m3 / self.m2.powf(1.5))
    }

    /// Excess kurtosis, `n · M₄ / M₂² − 3`; needs 4 observations and
    /// non-zero spread.
    pub fn kurtosis(&self) -> Option<f64> {
        if self.n < 4 || self.m2 == 0.0 {
            return None;
        }
        Some(self.n as f64 * self.m4 / (self.m2 * self.m2) - 3.0)
    }
}

// ---------------------------------------------------------------------------
// Internal
// ---------------------------------------------------------------------------

pub(crate) fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

/// Ascending copy of `data`; `None` if empty or not all finite.
fn sorted_copy(data: &[f64]) -> Option<Vec<f64>> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Some(sorted)
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Population central moments `(m₂, m₃, m₄)`, each divided by `n`.
fn central_moments(data: &[f64]) -> Option<(f64, f64, f64)> {
    let m = mean(data)?;
    let n = data.len() as f64;
    let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
    for &x in data {
        let d = x - m;
        let d2 = d * d;
        s2 += d2;
        s3 += d2 * d;
        s4 += d2 * d2;
    }
    Some((s2 / n, s3 / n, s4 / n))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
