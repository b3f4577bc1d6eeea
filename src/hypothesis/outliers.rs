//! Outlier criteria on a single sample.

use super::{Criterion, TestResult, list, single};
use crate::critical::{self, CriticalValue, Source};
use crate::error::Result;
use crate::sample::Sample;
use crate::statistics::{CDF, Mean, Quantile, Statistic, Variance};

/// Maximum normed deviation of the largest observation:
/// `u = |x₍ₙ₎ - x̄| / s`, zero for a constant sample.
pub(super) fn smirnov(samples: &[Sample<f64>]) -> Result<TestResult> {
    let x = single(samples)?;
    let n = x.len();

    let (mean, variance): (f64, f64) = (Mean, Variance::default()).compute(x);
    let std_dev = if variance > 0.0 { variance.sqrt() } else { 0.0 };
    let max = x.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let u = if std_dev > 0.0 { (max - mean).abs() / std_dev } else { 0.0 };
    let critical = critical::max_normed_deviation(n);
    let exceeds = u > critical.value;

    let result = TestResult::decide(
        Criterion::Smirnov,
        ("u", u),
        critical,
        exceeds,
        vec![
            format!("Sample size: n = {n}"),
            format!("Mean: {mean:.4}"),
            format!("Variance: {variance:.4}"),
            format!("Standard deviation: {std_dev:.4}"),
            format!("Largest observation: {max:.4}"),
        ],
    );

    Ok(if exceeds { result.with_outliers(vec![max]) } else { result })
}

/// Tukey fences: values outside `[Q1 - 1.5·IQR, Q3 + 1.5·IQR]` are flagged.
///
/// The statistic is the number of flagged values and any flagged value
/// rejects.
pub(super) fn interquartile(samples: &[Sample<f64>]) -> Result<TestResult> {
    const FENCE: f64 = 1.5;

    let x = single(samples)?;
    let ecdf = CDF.compute(x);
    let q1 = Quantile::q1().compute(&ecdf);
    let q3 = Quantile::q3().compute(&ecdf);
    let iqr = q3 - q1;
    let lower = q1 - FENCE * iqr;
    let upper = q3 + FENCE * iqr;

    let outliers: Vec<f64> = x
        .data
        .iter()
        .copied()
        .filter(|&v| v < lower || v > upper)
        .collect();
    let count = outliers.len();

    let result = TestResult::decide(
        Criterion::Hortley,
        ("outliers", count as f64),
        CriticalValue { value: 0.0, source: Source::Table },
        count > 0,
        vec![
            format!("Sample size: n = {}", x.len()),
            format!("Q1 (25th percentile): {q1:.4}"),
            format!("Q3 (75th percentile): {q3:.4}"),
            format!("Interquartile range: IQR = {iqr:.4}"),
            format!("Lower fence: Q1 - 1.5×IQR = {lower:.4}"),
            format!("Upper fence: Q3 + 1.5×IQR = {upper:.4}"),
            if outliers.is_empty() {
                "No outliers found".to_string()
            } else {
                format!("Outliers: {}", list(&outliers))
            },
        ],
    );

    Ok(result
        .with_solution(format!("Outliers found: {count}"))
        .with_extra("q1", q1)
        .with_extra("q3", q3)
        .with_extra("iqr", iqr)
        .with_outliers(outliers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Verdict;
    use approx::assert_abs_diff_eq;

    fn run(c: Criterion, values: &[f64]) -> TestResult {
        c.run(&[Sample::new(values.to_vec())]).unwrap()
    }

    #[test]
    fn smirnov_flags_gross_outlier() {
        let base = [10.1, 9.9, 10.0, 10.2, 9.8, 10.1, 9.9, 10.0, 10.1, 9.9];
        let mut values: Vec<f64> = base.iter().chain(&base).copied().take(19).collect();
        values.push(25.0);
        let result = run(Criterion::Smirnov, &values);
        assert_abs_diff_eq!(result.statistic, 4.2459, epsilon = 1e-3);
        assert_abs_diff_eq!(result.critical_value.value, 3.25, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.outliers, vec![25.0]);
    }

    #[test]
    fn smirnov_known_value() {
        // mean 3, s = sqrt(2.5), u = 2 / sqrt(2.5)
        let result = run(Criterion::Smirnov, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_abs_diff_eq!(result.statistic, 2.0 / 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(result.critical_value.value, 2.75, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);
    }

    #[test]
    fn smirnov_constant_sample_is_zero() {
        let result = run(Criterion::Smirnov, &[4.0; 6]);
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-15);
        assert_eq!(result.verdict, Verdict::Accept);
    }

    #[test]
    fn interquartile_fences() {
        let result = run(
            Criterion::Hortley,
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
        );
        assert_abs_diff_eq!(result.extra["q1"], 3.25, epsilon = 1e-12);
        assert_abs_diff_eq!(result.extra["q3"], 7.75, epsilon = 1e-12);
        assert_abs_diff_eq!(result.extra["iqr"], 4.5, epsilon = 1e-12);
        assert_eq!(result.outliers, vec![100.0]);
        assert_abs_diff_eq!(result.statistic, 1.0, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.solution, "Outliers found: 1");
    }

    #[test]
    fn interquartile_clean_sample() {
        let result = run(Criterion::Hortley, &[2.0, 3.0, 3.5, 4.0, 5.0]);
        assert!(result.outliers.is_empty());
        assert_eq!(result.verdict, Verdict::Accept);
        assert!(result.details.iter().any(|d| d == "No outliers found"));
    }
}
