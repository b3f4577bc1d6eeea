//! Descriptive statistics the criteria are built from.

/// A statistic computed from data of type `D`.
pub trait Statistic<D, T> {
    /// Evaluates the statistic on `data`.
    fn compute(&self, data: &D) -> T;
}

mod cdf;
mod mean;
mod quantile;
mod rank;
mod variance;

pub use cdf::{CDF, EmpiricalCDF};
pub use mean::Mean;
pub use quantile::Quantile;
pub use rank::{Ranks, SiegelTukeyRanks};
pub use variance::{StdDev, Variance};

// ===== 2-tuple =====
impl<D, T1, T2, S1, S2> Statistic<D, (T1, T2)> for (S1, S2)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2) {
        (self.0.compute(data), self.1.compute(data))
    }
}

// ===== 3-tuple =====
impl<D, T1, T2, T3, S1, S2, S3> Statistic<D, (T1, T2, T3)> for (S1, S2, S3)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
    S3: Statistic<D, T3>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2, T3) {
        (
            self.0.compute(data),
            self.1.compute(data),
            self.2.compute(data),
        )
    }
}
