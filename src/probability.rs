//! Discrete probability: binomial probabilities, expected values, and two
//! sampleable distributions.
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Binomial`] | n, p | np | np(1−p) |
//! | [`Discrete`] | values, probabilities | Σ pᵢvᵢ | Σ pᵢ(vᵢ − μ)² |

use crate::combinatorics::{combinations, ln_combinations};
use crate::random::WeightedSampler;
use crate::stats::{all_finite, kahan_sum};
use rand::Rng;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

fn invalid(msg: String) -> DistributionError {
    log::debug!("{msg}");
    DistributionError::InvalidParameters(msg)
}

/// Probability of exactly `k` successes in `n` Bernoulli trials with
/// success probability `p`, `C(n, k)·pᵏ·(1−p)ⁿ⁻ᵏ`.
///
/// Falls back to log space when `C(n, k)` does not fit in `u64`.
///
/// # Returns
/// - `None` if `k > n` or `p` is not in `[0, 1]`.
///
/// # Examples
/// ```
/// use u_numkit::probability::binomial_probability;
/// // three heads in five fair tosses
/// let p = binomial_probability(5, 3, 0.5).unwrap();
/// assert!((p - 0.3125).abs() < 1e-12);
/// ```
pub fn binomial_probability(n: u64, k: u64, p: f64) -> Option<f64> {
    if k > n || !(0.0..=1.0).contains(&p) {
        return None;
    }
    // 0⁰ = 1 at the degenerate ends
    if p == 0.0 {
        return Some(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Some(if k == n { 1.0 } else { 0.0 });
    }
    let failures = n - k;
    match combinations(n, k) {
        Some(c) if k <= i32::MAX as u64 && failures <= i32::MAX as u64 => {
            Some(c as f64 * p.powi(k as i32) * (1.0 - p).powi(failures as i32))
        }
        _ => {
            let ln_c = ln_combinations(n, k)?;
            let ln_p = ln_c + k as f64 * p.ln() + failures as f64 * (-p).ln_1p();
            Some(ln_p.exp())
        }
    }
}

/// Expected value of a discrete random variable, `Σ vᵢ·pᵢ`.
///
/// The probabilities are used as given; they are not required to sum to 1.
///
/// # Returns
/// - `None` if the slices are empty, differ in length, or contain NaN/Inf.
///
/// # Examples
/// ```
/// use u_numkit::probability::expected_value;
/// // a fair die
/// let faces = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let ev = expected_value(&faces, &[1.0 / 6.0; 6]).unwrap();
/// assert!((ev - 3.5).abs() < 1e-12);
/// ```
pub fn expected_value(values: &[f64], probabilities: &[f64]) -> Option<f64> {
    if values.is_empty()
        || values.len() != probabilities.len()
        || !all_finite(values)
        || !all_finite(probabilities)
    {
        return None;
    }
    let terms: Vec<f64> = values
        .iter()
        .zip(probabilities)
        .map(|(&v, &p)| v * p)
        .collect();
    Some(kahan_sum(&terms))
}

// ============================================================================
// Binomial Distribution
// ============================================================================

/// Binomial distribution: the number of successes in `n` independent
/// trials with success probability `p`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// # Errors
    /// Returns `Err` if `p` is not a finite value in `[0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(invalid(format!(
                "Binomial requires 0 ≤ p ≤ 1, got n={n}, p={p}"
            )));
        }
        Ok(Self { n, p })
    }

    pub fn trials(&self) -> u64 {
        self.n
    }

    pub fn success_probability(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// P(X = k); zero for `k > n`.
    pub fn pmf(&self, k: u64) -> f64 {
        binomial_probability(self.n, k, self.p).unwrap_or(0.0)
    }

    /// P(X ≤ k), clamped to at most 1.
    ///
    /// # Complexity
    /// O(min(k, n)) pmf evaluations.
    pub fn cdf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 1.0;
        }
        let terms: Vec<f64> = (0..=k).map(|i| self.pmf(i)).collect();
        kahan_sum(&terms).min(1.0)
    }

    /// Draws one value by simulating `n` Bernoulli trials.
    ///
    /// # Complexity
    /// O(n)
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        (0..self.n).filter(|_| rng.random_bool(self.p)).count() as u64
    }
}

// ============================================================================
// Discrete Distribution
// ============================================================================

/// Finite discrete distribution over arbitrary real values.
#[derive(Debug, Clone)]
pub struct Discrete {
    values: Vec<f64>,
    probabilities: Vec<f64>,
    sampler: WeightedSampler,
}

impl Discrete {
    /// Creates a distribution taking `values[i]` with probability
    /// `probabilities[i]`.
    ///
    /// # Errors
    /// Returns `Err` if the slices are empty or differ in length, any entry
    /// is NaN/Inf, any probability is negative, or the probabilities do not
    /// sum to 1 within `1e-9 · n`.
    ///
    /// # Examples
    /// ```
    /// use u_numkit::probability::Discrete;
    /// let coin = Discrete::new(&[0.0, 1.0], &[0.5, 0.5]).unwrap();
    /// assert!((coin.expected_value() - 0.5).abs() < 1e-12);
    /// assert!(Discrete::new(&[0.0, 1.0], &[0.5, 0.6]).is_err());
    /// ```
    pub fn new(values: &[f64], probabilities: &[f64]) -> Result<Self, DistributionError> {
        if values.is_empty() || values.len() != probabilities.len() {
            return Err(invalid(format!(
                "Discrete requires equal non-empty lengths, got {} values and {} probabilities",
                values.len(),
                probabilities.len()
            )));
        }
        if !all_finite(values) || !all_finite(probabilities) {
            return Err(invalid(
                "Discrete values and probabilities must be finite".into(),
            ));
        }
        if let Some(&p) = probabilities.iter().find(|&&p| p < 0.0) {
            return Err(invalid(format!(
                "Discrete probabilities must be non-negative, got {p}"
            )));
        }
        let total = kahan_sum(probabilities);
        if (total - 1.0).abs() > 1e-9 * probabilities.len() as f64 {
            return Err(invalid(format!(
                "Discrete probabilities must sum to 1, got {total}"
            )));
        }
        let sampler = WeightedSampler::new(probabilities).ok_or_else(|| {
            invalid("Discrete probabilities have no positive mass".into())
        })?;
        Ok(Self {
            values: values.to_vec(),
            probabilities: probabilities.to_vec(),
            sampler,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn expected_value(&self) -> f64 {
        let terms: Vec<f64> = self
            .values
            .iter()
            .zip(&self.probabilities)
            .map(|(&v, &p)| v * p)
            .collect();
        kahan_sum(&terms)
    }

    /// `Σ pᵢ(vᵢ − μ)²`.
    pub fn variance(&self) -> f64 {
        let mu = self.expected_value();
        let terms: Vec<f64> = self
            .values
            .iter()
            .zip(&self.probabilities)
            .map(|(&v, &p)| p * (v - mu) * (v - mu))
            .collect();
        kahan_sum(&terms)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Draws one of the values; zero-probability values are never drawn.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.values[self.sampler.sample(rng)]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn binomial_pmf_sums_to_one(n in 0_u64..80, p in 0.0_f64..=1.0) {
            let b = Binomial::new(n, p).unwrap();
            let terms: Vec<f64> = (0..=n).map(|k| b.pmf(k)).collect();
            prop_assert!((kahan_sum(&terms) - 1.0).abs() < 1e-9);
        }

        #[test]
        fn binomial_cdf_monotonic(n in 1_u64..60, p in 0.0_f64..=1.0, k in 0_u64..60) {
            let b = Binomial::new(n, p).unwrap();
            prop_assert!(b.cdf(k) <= b.cdf(k + 1) + 1e-12);
        }

        #[test]
        fn discrete_mean_within_support(
            values in proptest::collection::vec(-1e3_f64..1e3, 1..20),
            seed in any::<u64>(),
        ) {
            let n = values.len();
            let probs = vec![1.0 / n as f64; n];
            let d = Discrete::new(&values, &probs).unwrap();
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let ev = d.expected_value();
            prop_assert!(ev >= lo - 1e-9 && ev <= hi + 1e-9);
            let draw = d.sample(&mut crate::random::create_rng(seed));
            prop_assert!(values.contains(&draw));
        }
    }
}
