use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Arithmetic mean with **Kahan summation** to keep rounding error from
/// accumulating over long or wide-ranged samples.
///
/// An empty sample has mean `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        let mut sum = T::zero();
        let mut c = T::zero();

        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        let n = T::from_usize(slice.len()).expect("usize fits in float");
        sum * n.recip()
    }
}
