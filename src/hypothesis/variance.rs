//! Criteria comparing dispersion between samples.

use super::{Criterion, TestResult, list, pair};
use crate::critical;
use crate::error::{Error, Result};
use crate::sample::Sample;
use crate::statistics::{SiegelTukeyRanks, Statistic, Variance};

/// Ratio of the larger sample variance to the smaller one.
///
/// Degrees of freedom follow the numerator; a zero divisor gives `F = ∞`.
pub(super) fn fisher(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x1, x2) = pair(samples)?;
    let var1: f64 = Variance::default().compute(x1);
    let var2: f64 = Variance::default().compute(x2);

    let ratio = |num: f64, den: f64| if den > 0.0 { num / den } else { f64::INFINITY };
    let (f, df1, df2) = if var1 >= var2 {
        (ratio(var1, var2), x1.len() - 1, x2.len() - 1)
    } else {
        (ratio(var2, var1), x2.len() - 1, x1.len() - 1)
    };

    let critical = critical::fisher(df1, df2)?;
    Ok(TestResult::decide(
        Criterion::Fisher,
        ("F", f),
        critical,
        f > critical.value,
        vec![
            format!("Sample 1: n₁ = {}, variance = {var1:.4}", x1.len()),
            format!("Sample 2: n₂ = {}, variance = {var2:.4}", x2.len()),
            format!("Degrees of freedom: df₁ = {df1}, df₂ = {df2}"),
        ],
    ))
}

/// Share of the largest group variance in the total, `G = max s² / Σ s²`.
///
/// Groups must be of equal size; an all-zero total gives `G = 0`.
pub(super) fn cochran(groups: &[Sample<f64>]) -> Result<TestResult> {
    let k = groups.len();
    let n = groups.first().map_or(0, Sample::len);
    if let Some((i, g)) = groups.iter().enumerate().find(|(_, g)| g.len() != n) {
        return Err(Error::input(format!(
            "Cochran's test needs groups of equal size: group 1 has {n} values, group {} has {}",
            i + 1,
            g.len()
        )));
    }

    let variances: Vec<f64> = groups.iter().map(|g| Variance::default().compute(g)).collect();
    let max = variances.iter().copied().fold(0.0, f64::max);
    let sum: f64 = variances.iter().sum();
    let g = if sum > 0.0 { max / sum } else { 0.0 };

    let critical = critical::cochran(k, n - 1)?;
    Ok(TestResult::decide(
        Criterion::Cochran,
        ("G", g),
        critical,
        g > critical.value,
        vec![
            format!("Number of groups: k = {k}"),
            format!("Group size: n = {n}"),
            format!("Group variances: {}", list(&variances)),
            format!("Largest variance: {max:.4}"),
            format!("Sum of variances: {sum:.4}"),
        ],
    ))
}

/// Bartlett's chi-squared statistic for homogeneity of `k` variances.
///
/// A group with zero variance leaves the statistic undefined.
pub(super) fn bartlett(groups: &[Sample<f64>]) -> Result<TestResult> {
    let k = groups.len();
    let sizes: Vec<usize> = groups.iter().map(Sample::len).collect();
    let variances: Vec<f64> = groups.iter().map(|g| Variance::default().compute(g)).collect();

    if let Some(i) = variances.iter().position(|&v| v <= 0.0) {
        return Err(Error::computation(format!(
            "Group {} has zero variance, Bartlett's statistic is undefined",
            i + 1
        )));
    }

    let total: usize = sizes.iter().sum();
    let dof = (total - k) as f64;
    let pooled = sizes
        .iter()
        .zip(&variances)
        .map(|(&n, &v)| (n - 1) as f64 * v)
        .sum::<f64>()
        / dof;

    let numerator = dof * pooled.ln()
        - sizes
            .iter()
            .zip(&variances)
            .map(|(&n, &v)| (n - 1) as f64 * v.ln())
            .sum::<f64>();
    let reciprocal: f64 = sizes.iter().map(|&n| 1.0 / (n - 1) as f64).sum();
    let denominator = 1.0 + (reciprocal - 1.0 / dof) / (3.0 * (k - 1) as f64);
    let chi2 = numerator / denominator;

    let df = k - 1;
    let critical = critical::chi_squared(df)?;
    Ok(TestResult::decide(
        Criterion::Bartlett,
        ("χ²", chi2),
        critical,
        chi2 > critical.value,
        vec![
            format!("Number of groups: k = {k}"),
            format!("Total observations: N = {total}"),
            format!("Group sizes: {sizes:?}"),
            format!("Group variances: {}", list(&variances)),
            format!("Pooled variance: {pooled:.4}"),
            format!("Degrees of freedom: df = {df}"),
        ],
    ))
}

/// Siegel-Tukey rank-sum test for equal dispersion, normal approximation.
pub(super) fn siegel_tukey(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x1, x2) = pair(samples)?;
    let (n1, n2) = (x1.len(), x2.len());
    let n = n1 + n2;

    let combined: Vec<f64> = x1.data.iter().chain(&x2.data).copied().collect();
    let ranks: Vec<f64> = SiegelTukeyRanks.compute(&combined);
    let w1: f64 = ranks.iter().take(n1).sum();

    let expected = (n1 * (n + 1)) as f64 / 2.0;
    let variance = (n1 * n2 * (n + 1)) as f64 / 12.0;
    let z = if variance > 0.0 { (w1 - expected) / variance.sqrt() } else { 0.0 };

    let critical = critical::normal_two_sided();
    Ok(TestResult::decide(
        Criterion::SiegelTukey,
        ("Z", z),
        critical,
        z.abs() > critical.value,
        vec![
            format!("Sample 1: n₁ = {n1}"),
            format!("Sample 2: n₂ = {n2}"),
            format!("Rank sum of sample 1: W₁ = {w1:.1}"),
            format!("Expected rank sum: E(W) = {expected:.4}"),
            format!("Variance: Var(W) = {variance:.4}"),
        ],
    )
    .with_extra("w1", w1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Verdict;
    use approx::assert_abs_diff_eq;

    fn samples(groups: &[&[f64]]) -> Vec<Sample<f64>> {
        groups.iter().map(|g| Sample::new(g.to_vec())).collect()
    }

    const A: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0];
    const B: &[f64] = &[2.0, 4.0, 6.0, 8.0, 10.0];
    const C: &[f64] = &[1.0, 1.5, 2.0, 2.5, 3.0];

    #[test]
    fn fisher_orders_by_larger_variance() {
        let result = Criterion::Fisher.run(&samples(&[A, B])).unwrap();
        assert_abs_diff_eq!(result.statistic, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.critical_value.value, 6.39, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);

        let wide = [10.0, 20.0, 30.0, 40.0, 50.0];
        let result = Criterion::Fisher.run(&samples(&[&wide, A])).unwrap();
        assert_abs_diff_eq!(result.statistic, 100.0, epsilon = 1e-9);
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn fisher_zero_divisor_is_infinite() {
        let result = Criterion::Fisher.run(&samples(&[A, &[3.0, 3.0, 3.0]])).unwrap();
        assert!(result.statistic.is_infinite());
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn cochran_known_value() {
        let result = Criterion::Cochran.run(&samples(&[A, B, C])).unwrap();
        assert_abs_diff_eq!(result.statistic, 10.0 / 13.125, epsilon = 1e-12);
        assert_abs_diff_eq!(result.critical_value.value, 0.7457, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn cochran_requires_equal_group_sizes() {
        let err = Criterion::Cochran.run(&samples(&[A, &[1.0, 2.0, 3.0]])).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn bartlett_known_value() {
        let result = Criterion::Bartlett.run(&samples(&[A, B, C])).unwrap();
        assert_abs_diff_eq!(result.statistic, 6.0439, epsilon = 1e-3);
        assert_abs_diff_eq!(result.critical_value.value, 5.991, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn bartlett_equal_variances_is_zero() {
        let shifted: Vec<f64> = A.iter().map(|v| v + 7.0).collect();
        let result = Criterion::Bartlett.run(&samples(&[A, &shifted])).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn bartlett_zero_variance_is_computation_error() {
        let err = Criterion::Bartlett.run(&samples(&[A, &[2.0, 2.0, 2.0]])).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn siegel_tukey_identical_samples() {
        let result = Criterion::SiegelTukey.run(&samples(&[B, B])).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);
    }

    #[test]
    fn siegel_tukey_detects_spread() {
        let narrow = [4.8, 4.9, 5.0, 5.0, 5.1, 5.2, 4.95, 5.05];
        let wide = [1.0, 9.0, 2.0, 8.0, 0.5, 9.5, 3.0, 7.0];
        let result = Criterion::SiegelTukey.run(&samples(&[&narrow, &wide])).unwrap();
        assert!(result.statistic > 1.96, "z = {}", result.statistic);
        assert_eq!(result.verdict, Verdict::Reject);
    }
}
