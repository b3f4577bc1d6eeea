use super::Statistic;
use num_traits::Float;
use std::cmp::Ordering;

/// Empirical Cumulative Distribution Function (ECDF).
///
/// Represents the step function: Fₙ(x) = (1/n) * Σᵢ I(Xᵢ ≤ x)
///
/// # Float Handling Policy
/// - NaN values are **silently filtered** during construction
/// - Remaining values are sorted using IEEE 754 semantics via `partial_cmp`
/// - Evaluation at NaN input returns `f64::NAN`
#[derive(Debug, Clone)]
pub struct EmpiricalCDF<T> {
    sorted: Vec<T>,
}

impl<T> EmpiricalCDF<T> {
    /// Number of non-NaN observations.
    #[inline]
    pub fn n(&self) -> usize {
        self.sorted.len()
    }

    /// Order statistics, ascending.
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.sorted
    }

    /// Whether no observations remain.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

impl<T> EmpiricalCDF<T>
where
    T: Float,
{
    /// Creates ECDF from float slice with NaN filtering.
    pub fn from_float_slice(data: &[T]) -> Self {
        let mut sorted: Vec<T> = data.iter().copied().filter(|x| !x.is_nan()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("NaNs already filtered"));
        Self { sorted }
    }

    /// Evaluates ECDF at a point.
    ///
    /// # Returns
    /// - `f64::NAN` if `x` is NaN or the ECDF is empty
    /// - `0.0` for `-∞`, `1.0` for `+∞`
    /// - Otherwise: proportion of values ≤ `x`
    #[inline]
    pub fn eval_float(&self, x: &T) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x.is_infinite() {
            return if x.is_sign_positive() { 1.0 } else { 0.0 };
        }

        let n = self.sorted.len();
        if n == 0 {
            return f64::NAN;
        }

        let idx = self
            .sorted
            .partition_point(|v| v.partial_cmp(x).is_some_and(|ord| ord != Ordering::Greater));

        idx as f64 / n as f64
    }
}

/// ECDF statistic constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CDF;

impl<D, T> Statistic<D, EmpiricalCDF<T>> for CDF
where
    D: AsRef<[T]>,
    T: Float,
{
    #[inline]
    fn compute(&self, data: &D) -> EmpiricalCDF<T> {
        EmpiricalCDF::from_float_slice(data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_filtered_and_points_sorted() {
        let ecdf = CDF.compute(&[3.0_f64, f64::NAN, 1.0, 2.0]);
        assert_eq!(ecdf.n(), 3);
        assert_eq!(ecdf.points(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn evaluates_step_function() {
        let ecdf = CDF.compute(&[1.0_f64, 2.0, 2.0, 4.0]);
        assert!((ecdf.eval_float(&0.5) - 0.0).abs() < 1e-12);
        assert!((ecdf.eval_float(&2.0) - 0.75).abs() < 1e-12);
        assert!((ecdf.eval_float(&f64::INFINITY) - 1.0).abs() < 1e-12);
        assert!(ecdf.eval_float(&f64::NAN).is_nan());
    }
}
