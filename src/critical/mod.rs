//! Critical values at the fixed significance level [`ALPHA`].
//!
//! Small degrees of freedom are answered from printed tables; everything else
//! falls back to the matching `statrs` quantile function.

mod tables;

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::{Error, Result};

/// Significance level of every criterion.
pub const ALPHA: f64 = 0.05;

/// Where a critical value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Read directly from a printed table.
    Table,
    /// Linear interpolation between two table rows.
    Interpolated,
    /// Nearest table row, `n` lies outside the table.
    Clamped,
    /// Computed from a distribution quantile.
    Quantile,
}

/// A threshold together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalValue {
    /// The threshold itself.
    pub value: f64,
    /// How it was obtained.
    pub source: Source,
}

impl CriticalValue {
    fn table(value: f64) -> Self {
        Self { value, source: Source::Table }
    }

    fn quantile(value: f64) -> Self {
        Self { value, source: Source::Quantile }
    }
}

impl Display for CriticalValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.source {
            Source::Table => write!(f, "{:.4}", self.value),
            Source::Interpolated => write!(f, "{:.4} (interpolated)", self.value),
            Source::Clamped => write!(f, "{:.4} (nearest table entry)", self.value),
            Source::Quantile => write!(f, "{:.4} (distribution quantile)", self.value),
        }
    }
}

/// Two-sided Student's t critical value.
pub fn student(df: usize) -> Result<CriticalValue> {
    if let Some(&v) = df.checked_sub(1).and_then(|i| tables::STUDENT.get(i)) {
        return Ok(CriticalValue::table(v));
    }
    let dist = StudentsT::new(0.0, 1.0, df as f64)
        .map_err(|e| Error::computation(format!("t distribution with {df} df: {e}")))?;
    Ok(CriticalValue::quantile(dist.inverse_cdf(1.0 - ALPHA / 2.0)))
}

/// Upper Fisher-Snedecor critical value for `F(df1, df2)`.
pub fn fisher(df1: usize, df2: usize) -> Result<CriticalValue> {
    let cell = df2
        .checked_sub(1)
        .and_then(|row| tables::FISHER.get(row))
        .zip(df1.checked_sub(1))
        .and_then(|(row, col)| row.get(col));
    if let Some(&v) = cell {
        return Ok(CriticalValue::table(v));
    }
    f_quantile(df1, df2, 1.0 - ALPHA).map(CriticalValue::quantile)
}

/// Cochran's G critical value for `k` groups of `df + 1` observations.
///
/// Outside the table: `1 / (1 + (k-1) / F(1 - α/k; df, (k-1)·df))`.
pub fn cochran(k: usize, df: usize) -> Result<CriticalValue> {
    let cell = k
        .checked_sub(2)
        .and_then(|row| tables::COCHRAN.get(row))
        .zip(df.checked_sub(1))
        .and_then(|(row, col)| row.get(col));
    if let Some(&v) = cell {
        return Ok(CriticalValue::table(v));
    }
    if k < 2 {
        return Err(Error::input("Cochran's test needs at least 2 groups"));
    }
    let f = f_quantile(df, (k - 1) * df, 1.0 - ALPHA / k as f64)?;
    Ok(CriticalValue::quantile(1.0 / (1.0 + (k - 1) as f64 / f)))
}

/// Upper chi-squared critical value.
pub fn chi_squared(df: usize) -> Result<CriticalValue> {
    if let Some(&v) = df.checked_sub(1).and_then(|i| tables::CHI_SQUARED.get(i)) {
        return Ok(CriticalValue::table(v));
    }
    let dist = ChiSquared::new(df as f64)
        .map_err(|e| Error::computation(format!("chi-squared distribution with {df} df: {e}")))?;
    Ok(CriticalValue::quantile(dist.inverse_cdf(1.0 - ALPHA)))
}

/// Critical maximum normed deviation for a sample of `n`.
///
/// Linear interpolation between listed sample sizes; sizes outside the
/// table take the nearest end point.
pub fn max_normed_deviation(n: usize) -> CriticalValue {
    let table = &tables::MAX_NORMED_DEVIATION;
    let idx = table.partition_point(|&(m, _)| m < n);

    match (idx.checked_sub(1).and_then(|i| table.get(i)), table.get(idx)) {
        (_, Some(&(m, v))) if m == n => CriticalValue::table(v),
        (Some(&(n1, v1)), Some(&(n2, v2))) => {
            let t = (n - n1) as f64 / (n2 - n1) as f64;
            CriticalValue {
                value: v1 + (v2 - v1) * t,
                source: Source::Interpolated,
            }
        }
        (None, Some(&(_, v))) | (Some(&(_, v)), None) => CriticalValue {
            value: v,
            source: Source::Clamped,
        },
        (None, None) => unreachable!("table is not empty"),
    }
}

/// Two-sided standard normal critical value.
pub fn normal_two_sided() -> CriticalValue {
    CriticalValue::table(tables::NORMAL_TWO_SIDED)
}

fn f_quantile(df1: usize, df2: usize, p: f64) -> Result<f64> {
    let dist = FisherSnedecor::new(df1 as f64, df2 as f64).map_err(|e| {
        Error::computation(format!("F distribution with ({df1}, {df2}) df: {e}"))
    })?;
    Ok(dist.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn student_reads_table_then_quantile() {
        let small = student(10).unwrap();
        assert_eq!(small.source, Source::Table);
        assert_abs_diff_eq!(small.value, 2.228, epsilon = 1e-12);

        let large = student(60).unwrap();
        assert_eq!(large.source, Source::Quantile);
        assert_abs_diff_eq!(large.value, 2.0003, epsilon = 1e-3);
    }

    #[test]
    fn student_table_agrees_with_quantile_at_boundary() {
        let dist = StudentsT::new(0.0, 1.0, 30.0).unwrap();
        assert_abs_diff_eq!(student(30).unwrap().value, dist.inverse_cdf(0.975), epsilon = 1e-3);
    }

    #[test]
    fn student_rejects_zero_df() {
        assert!(matches!(student(0), Err(Error::Computation(_))));
    }

    #[test]
    fn fisher_is_indexed_numerator_first() {
        assert_abs_diff_eq!(fisher(1, 10).unwrap().value, 4.96, epsilon = 1e-12);
        assert_abs_diff_eq!(fisher(10, 1).unwrap().value, 241.9, epsilon = 1e-12);
        assert_abs_diff_eq!(fisher(4, 5).unwrap().value, 5.19, epsilon = 1e-12);
    }

    #[test]
    fn fisher_falls_back_to_quantile() {
        let cv = fisher(2, 27).unwrap();
        assert_eq!(cv.source, Source::Quantile);
        assert_abs_diff_eq!(cv.value, 3.354, epsilon = 1e-2);
    }

    #[test]
    fn cochran_table_and_formula_agree() {
        assert_abs_diff_eq!(cochran(2, 1).unwrap().value, 0.9985, epsilon = 1e-12);
        assert_abs_diff_eq!(cochran(4, 10).unwrap().value, 0.4884, epsilon = 1e-12);

        // 1 / (1 + 1 / F(0.975; 1, 1)) with F = 647.79
        let f = f_quantile(1, 1, 0.975).unwrap();
        assert_abs_diff_eq!(1.0 / (1.0 + 1.0 / f), 0.9985, epsilon = 1e-3);

        let outside = cochran(5, 4).unwrap();
        assert_eq!(outside.source, Source::Quantile);
        assert!(outside.value > 0.2 && outside.value < 1.0);
    }

    #[test]
    fn chi_squared_boundaries() {
        assert_abs_diff_eq!(chi_squared(2).unwrap().value, 5.991, epsilon = 1e-12);
        assert_abs_diff_eq!(chi_squared(11).unwrap().value, 19.675, epsilon = 1e-2);
    }

    #[test]
    fn max_normed_deviation_interpolates_and_clamps() {
        assert_eq!(max_normed_deviation(10), CriticalValue::table(2.99));

        let mid = max_normed_deviation(22);
        assert_eq!(mid.source, Source::Interpolated);
        assert_abs_diff_eq!(mid.value, 3.25 + 0.06 * 2.0 / 5.0, epsilon = 1e-12);

        assert_eq!(max_normed_deviation(3).source, Source::Clamped);
        assert_abs_diff_eq!(max_normed_deviation(3).value, 2.75, epsilon = 1e-12);
        assert_abs_diff_eq!(max_normed_deviation(500).value, 3.72, epsilon = 1e-12);
    }
}
