//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is built on the double-precision complementary error function
//! from `statrs`, so tail values keep full relative accuracy instead of
//! cancelling against 1.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Returns
/// The probability P(X <= x), in range [0, 1]. `Φ(x) + Φ(-x) = 1` holds to
/// rounding, which keeps put-call parity exact in the pricer.
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.959_963_984_540_054) - 0.975).abs() < 1e-12);
/// assert!(norm_cdf(-40.0) >= 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0) - 0.241_970_724_519_143_37).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_05, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.5), 0.993_790_334_674_223_7, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_deep_tail_relative_accuracy() {
        // Φ(-10) ≈ 7.6199e-24; a 1 - Φ(10) implementation would return 0.
        let tail = norm_cdf(-10.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 7.619_853_024_160_527e-24, max_relative = 1e-10);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-6.0, -2.3, -0.7, 0.0, 0.4, 1.9, 5.5] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let mut prev = norm_cdf(-8.0);
        let mut x = -8.0;
        while x < 8.0 {
            x += 0.05;
            let cur = norm_cdf(x);
            assert!(cur >= prev, "CDF decreased at x = {}", x);
            prev = cur;
        }
    }

    #[test]
    fn test_norm_cdf_limits() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_pdf_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-16);
        assert_relative_eq!(norm_pdf(2.0), 0.053_990_966_513_188_06, epsilon = 1e-15);
        assert_eq!(norm_pdf(1.3), norm_pdf(-1.3));
    }

    #[test]
    fn test_norm_pdf_is_cdf_derivative() {
        let h = 1e-5;
        for x in [-2.0, -0.5, 0.0, 0.8, 1.7] {
            let fd = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(norm_pdf(x), fd, epsilon = 1e-9);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_cdf_in_unit_interval(x in -50.0_f64..50.0) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }

            #[test]
            fn test_pdf_non_negative_and_bounded(x in -50.0_f64..50.0) {
                let d = norm_pdf(x);
                prop_assert!(d >= 0.0);
                prop_assert!(d <= FRAC_1_SQRT_2PI);
            }
        }
    }
}
