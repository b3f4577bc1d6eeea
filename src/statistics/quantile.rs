use num_traits::{Float, FromPrimitive};

use super::Statistic;
use crate::EmpiricalCDF;

/// Quantile estimator with linear interpolation between order statistics.
///
/// With sorted values `x₍₀₎ ≤ … ≤ x₍ₙ₋₁₎` and `h = p·(n-1)`:
/// ```text
/// Q(p) = x₍⌊h⌋₎ + (h - ⌊h⌋)·(x₍⌊h⌋+1₎ - x₍⌊h⌋₎)
/// ```
/// This is R's type=7 definition, the usual default of numeric libraries.
/// An empty ECDF yields `NaN`.
#[derive(Debug, Clone, Copy)]
pub struct Quantile {
    p: f64,
}

impl Quantile {
    /// Creates a quantile estimator for probability `p ∈ [0, 1]`.
    #[inline]
    pub fn new(p: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&p), "Quantile p must be in [0,1]");
        Self { p }
    }

    /// Convenience constructor for median (p = 0.5).
    #[inline]
    pub fn median() -> Self {
        Self { p: 0.5 }
    }

    /// Lower quartile.
    #[inline]
    pub fn q1() -> Self {
        Self { p: 0.25 }
    }

    /// Upper quartile.
    #[inline]
    pub fn q3() -> Self {
        Self { p: 0.75 }
    }
}

impl<T: Float + FromPrimitive> Statistic<EmpiricalCDF<T>, T> for Quantile {
    fn compute(&self, ecdf: &EmpiricalCDF<T>) -> T {
        let points = ecdf.points();
        let Some(&last) = points.last() else {
            return T::nan();
        };

        let h = self.p * (points.len() - 1) as f64;
        let lo = h.floor() as usize;
        let frac = T::from_f64(h - h.floor()).expect("fraction fits in float");

        let lower = points.get(lo).copied().unwrap_or(last);
        let upper = points.get(lo + 1).copied().unwrap_or(last);
        lower + frac * (upper - lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CDF;
    use approx::assert_abs_diff_eq;

    #[test]
    fn interpolates_between_order_statistics() {
        let ecdf = CDF.compute(&[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]);
        assert_abs_diff_eq!(Quantile::q1().compute(&ecdf), 3.25, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantile::median().compute(&ecdf), 5.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantile::q3().compute(&ecdf), 7.75, epsilon = 1e-12);
    }

    #[test]
    fn extremes_are_min_and_max() {
        let ecdf = CDF.compute(&[4.0_f64, -1.0, 2.5]);
        assert_abs_diff_eq!(Quantile::new(0.0).compute(&ecdf), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Quantile::new(1.0).compute(&ecdf), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_is_nan() {
        let ecdf = CDF.compute(&Vec::<f64>::new());
        let q: f64 = Quantile::median().compute(&ecdf);
        assert!(q.is_nan());
    }
}
