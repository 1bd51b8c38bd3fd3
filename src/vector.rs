//! Euclidean vector algebra over `f64` slices.
//!
//! Binary operations require equal lengths and return `None` otherwise.
//! Results are freshly allocated; inputs are never modified.

/// Inner product `Σ aᵢbᵢ`.
///
/// # Examples
/// ```
/// use u_numkit::vector::dot;
/// assert_eq!(dot(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), Some(0.0));
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Some(32.0));
/// assert_eq!(dot(&[1.0], &[1.0, 2.0]), None);
/// ```
pub fn dot(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean norm `‖a‖`; zero for the empty vector.
pub fn magnitude(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Euclidean distance `‖a − b‖`.
pub fn distance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    let sq: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    Some(sq.sqrt())
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on
/// (anti)parallel vectors cannot produce NaN.
///
/// # Returns
/// - `None` if lengths differ or either vector has zero magnitude.
///
/// # Examples
/// ```
/// use u_numkit::vector::angle;
/// let a = angle(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).unwrap();
/// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle(a: &[f64], b: &[f64]) -> Option<f64> {
    let d = dot(a, b)?;
    let denom = magnitude(a) * magnitude(b);
    if denom == 0.0 {
        return None;
    }
    Some((d / denom).clamp(-1.0, 1.0).acos())
}

/// Unit vector in the direction of `a`; `None` for the zero vector.
///
/// # Examples
/// ```
/// use u_numkit::vector::normalize;
/// assert_eq!(normalize(&[3.0, 4.0]), Some(vec![0.6, 0.8]));
/// assert_eq!(normalize(&[0.0]), None);
/// ```
pub fn normalize(a: &[f64]) -> Option<Vec<f64>> {
    let m = magnitude(a);
    if m == 0.0 {
        return None;
    }
    Some(a.iter().map(|x| x / m).collect())
}

/// Cross product of two 3-vectors.
///
/// # Examples
/// ```
/// use u_numkit::vector::cross;
/// assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
/// ```
pub fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn add(a: &[f64], b: &[f64]) -> Option<Vec<f64>> {
    zip_with(a, b, |x, y| x + y)
}

pub fn subtract(a: &[f64], b: &[f64]) -> Option<Vec<f64>> {
    zip_with(a, b, |x, y| x - y)
}

pub fn scale(a: &[f64], k: f64) -> Vec<f64> {
    a.iter().map(|x| x * k).collect()
}

/// Vector projection of `a` onto `onto`, `(a·b / b·b) · b`.
///
/// # Returns
/// - `None` if lengths differ or `onto` is the zero vector.
///
/// # Examples
/// ```
/// use u_numkit::vector::projection;
/// assert_eq!(projection(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), Some(vec![0.0, 0.0, 0.0]));
/// assert_eq!(projection(&[2.0, 3.0], &[1.0, 0.0]), Some(vec![2.0, 0.0]));
/// ```
pub fn projection(a: &[f64], onto: &[f64]) -> Option<Vec<f64>> {
    let num = dot(a, onto)?;
    let denom = dot(onto, onto)?;
    if denom == 0.0 {
        return None;
    }
    Some(scale(onto, num / denom))
}

fn zip_with(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Option<Vec<f64>> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-12;
    const X: [f64; 3] = [1.0, 0.0, 0.0];
    const Y: [f64; 3] = [0.0, 1.0, 0.0];

    #[test]
    fn test_dot() {
        assert_eq!(dot(&X, &Y), Some(0.0));
        assert_eq!(dot(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 5.0]), Some(55.0));
        assert_eq!(dot(&[], &[]), Some(0.0));
    }

    #[test]
    fn test_magnitude_and_distance() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude(&X), 1.0);
        assert_eq!(magnitude(&[]), 0.0);
        assert!((distance(&X, &Y).unwrap() - 2.0_f64.sqrt()).abs() < TOL);
        assert_eq!(distance(&X, &[1.0]), None);
    }

    #[test]
    fn test_angle() {
        assert!((angle(&X, &Y).unwrap() - FRAC_PI_2).abs() < TOL);
        assert!(angle(&X, &X).unwrap().abs() < TOL);
        assert!((angle(&X, &[-3.0, 0.0, 0.0]).unwrap() - PI).abs() < TOL);
        assert_eq!(angle(&X, &[0.0, 0.0, 0.0]), None);
        assert_eq!(angle(&X, &[1.0, 0.0]), None);
    }

    #[test]
    fn test_angle_parallel_does_not_nan() {
        let a = [0.1, 0.2, 0.3];
        let b = [0.3, 0.6, 0.9];
        let theta = angle(&a, &b).unwrap();
        assert!(!theta.is_nan());
        assert!(theta.abs() < 1e-7);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(&[3.0, 4.0]).unwrap();
        assert!((n[0] - 0.6).abs() < TOL);
        assert!((n[1] - 0.8).abs() < TOL);
        assert!((magnitude(&n) - 1.0).abs() < TOL);
        assert_eq!(normalize(&[0.0]), None);
        assert_eq!(normalize(&[]), None);
    }

    #[test]
    fn test_cross() {
        assert_eq!(cross(&X, &Y), [0.0, 0.0, 1.0]);
        assert_eq!(cross(&Y, &X), [0.0, 0.0, -1.0]);
        assert_eq!(cross(&X, &X), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_elementwise() {
        assert_eq!(add(&X, &Y), Some(vec![1.0, 1.0, 0.0]));
        assert_eq!(subtract(&X, &Y), Some(vec![1.0, -1.0, 0.0]));
        assert_eq!(scale(&X, 5.0), vec![5.0, 0.0, 0.0]);
        assert_eq!(add(&X, &[1.0]), None);
        assert_eq!(subtract(&[1.0], &X), None);
    }

    #[test]
    fn test_projection() {
        assert_eq!(projection(&X, &Y), Some(vec![0.0, 0.0, 0.0]));
        assert_eq!(projection(&[3.0, 3.0], &[0.0, 2.0]), Some(vec![0.0, 3.0]));
        assert_eq!(projection(&X, &[0.0, 0.0, 0.0]), None);
        assert_eq!(projection(&[1.0], &[0.0]), None);
    }
}
