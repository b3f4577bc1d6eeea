use num_traits::{Float, FromPrimitive};

use super::{Mean, Statistic};

/// Variance with a configurable delta degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Subtracted from `n` in the denominator.
    pub ddof: usize,
}

impl Variance {
    /// - `ddof = 0`: population variance (biased)
    /// - `ddof = 1`: sample variance (Bessel's correction), the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        if slice.len() <= self.ddof {
            return T::nan();
        }

        let mean: T = Mean.compute(data);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c2 = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c2;
            let t = sq_sum + y;
            c2 = (t - sq_sum) - y;
            sq_sum = t;
        }

        let dof = T::from_usize(slice.len() - self.ddof).expect("usize fits in float");
        sq_sum / dof
    }
}

/// Square root of [`Variance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDev(pub Variance);

impl<D, T> Statistic<D, T> for StdDev
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let var: T = self.0.compute(data);
        var.sqrt()
    }
}
