//! Seeded random number generation, shuffling, and weighted sampling.
//!
//! Used by [`crate::probability`] to draw from distributions and by
//! [`crate::text::shuffle_chars`]. Every consumer takes `&mut impl Rng`, so
//! callers choose between reproducible runs ([`create_rng`]) and any other
//! generator.

use rand::Rng;

/// Creates a fast generator seeded with `seed`.
///
/// `SmallRng` is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_numkit::random::create_rng;
/// use rand::Rng;
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// In-place Fisher–Yates (Durstenfeld) shuffle; every permutation is
/// equally likely.
///
/// Reference: Knuth, *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// shuffle(&mut v, &mut create_rng(42));
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Draws indices with probability proportional to their weight.
///
/// Stores the running total of the weights and binary-searches it per
/// draw. Non-positive weights are never drawn.
///
/// # Complexity
/// Construction O(n), sampling O(log n)
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    cumulative: Vec<f64>,
    total: f64,
}

impl WeightedSampler {
    /// Builds a sampler over `weights`.
    ///
    /// # Returns
    /// - `None` if `weights` is empty, contains NaN/Inf, or has no positive
    ///   weight.
    pub fn new(weights: &[f64]) -> Option<Self> {
        if weights.is_empty() || weights.iter().any(|w| !w.is_finite()) {
            return None;
        }
        let cumulative: Vec<f64> = weights
            .iter()
            .scan(0.0, |acc, &w| {
                *acc += w.max(0.0);
                Some(*acc)
            })
            .collect();
        let total = *cumulative.last()?;
        if total <= 0.0 {
            return None;
        }
        Some(Self { cumulative, total })
    }

    /// Draws one index.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let threshold = rng.random_range(0.0..self.total);
        // first index whose running total exceeds the threshold
        let idx = self.cumulative.partition_point(|&c| c <= threshold);
        idx.min(self.cumulative.len() - 1)
    }

    /// Number of categories, including zero-weight ones.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}
