//! Criteria comparing means.

use super::{Criterion, TestResult, list, pair};
use crate::critical;
use crate::error::Result;
use crate::sample::Sample;
use crate::statistics::{Mean, StdDev, Statistic, Variance};

/// `num / den`, with a zero denominator giving `∞` unless the numerator is
/// zero as well, in which case the samples do not differ at all.
fn guarded_ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else if num.abs() > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Two-sample t-test with pooled variance, `df = n₁ + n₂ - 2`.
pub(super) fn student(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x1, x2) = pair(samples)?;
    let (n1, n2) = (x1.len(), x2.len());
    let (mean1, var1): (f64, f64) = (Mean, Variance::default()).compute(x1);
    let (mean2, var2): (f64, f64) = (Mean, Variance::default()).compute(x2);

    let df = n1 + n2 - 2;
    let pooled = ((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2) / df as f64;
    let std_error = (pooled * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();
    let t = guarded_ratio((mean1 - mean2).abs(), std_error);

    let critical = critical::student(df)?;
    Ok(TestResult::decide(
        Criterion::Student,
        ("t", t),
        critical,
        t > critical.value,
        vec![
            format!("Sample 1: n₁ = {n1}, mean = {mean1:.4}, variance = {var1:.4}"),
            format!("Sample 2: n₂ = {n2}, mean = {mean2:.4}, variance = {var2:.4}"),
            format!("Pooled variance: {pooled:.4}"),
            format!("Degrees of freedom: df = {df}"),
        ],
    ))
}

/// Paired t-test on the element-wise differences, `df = n - 1`.
pub(super) fn student_paired(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x1, x2) = pair(samples)?;
    let differences: Sample<f64> = x1.data.iter().zip(&x2.data).map(|(a, b)| a - b).collect();
    let n = differences.len();

    let (mean_diff, std_diff): (f64, f64) = (Mean, StdDev::default()).compute(&differences);
    let t = guarded_ratio(mean_diff.abs(), std_diff / (n as f64).sqrt());

    let df = n - 1;
    let critical = critical::student(df)?;
    Ok(TestResult::decide(
        Criterion::StudentPaired,
        ("t", t),
        critical,
        t > critical.value,
        vec![
            format!("Number of pairs: n = {n}"),
            format!("Mean difference: {mean_diff:.4}"),
            format!("Standard deviation of differences: {std_diff:.4}"),
            format!("Degrees of freedom: df = {df}"),
        ],
    ))
}

/// One-way ANOVA, `F = MS_between / MS_within` on `(k - 1, N - k)` df.
pub(super) fn anova(groups: &[Sample<f64>]) -> Result<TestResult> {
    let k = groups.len();
    let sizes: Vec<usize> = groups.iter().map(Sample::len).collect();
    let moments: Vec<(f64, f64)> = groups
        .iter()
        .map(|g| (Mean, Variance::default()).compute(g))
        .collect();
    let means: Vec<f64> = moments.iter().map(|&(m, _)| m).collect();

    let total: usize = sizes.iter().sum();
    let grand_mean = groups.iter().flat_map(|g| &g.data).sum::<f64>() / total as f64;

    let ss_between: f64 = sizes
        .iter()
        .zip(&means)
        .map(|(&n, &m)| n as f64 * (m - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = sizes
        .iter()
        .zip(&moments)
        .map(|(&n, &(_, v))| (n - 1) as f64 * v)
        .sum();
    let ss_total = ss_between + ss_within;

    let df_between = k - 1;
    let df_within = total - k;
    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;
    let f = guarded_ratio(ms_between, ms_within);

    let critical = critical::fisher(df_between, df_within)?;
    Ok(TestResult::decide(
        Criterion::Anova,
        ("F", f),
        critical,
        f > critical.value,
        vec![
            format!("Number of groups: k = {k}"),
            format!("Total observations: N = {total}"),
            format!("Group sizes: {sizes:?}"),
            format!("Group means: {}", list(&means)),
            format!("Grand mean: {grand_mean:.4}"),
            format!(
                "SS between = {ss_between:.4}, SS within = {ss_within:.4}, SS total = {ss_total:.4}"
            ),
            format!("MS between = {ms_between:.4}, MS within = {ms_within:.4}"),
            format!("Degrees of freedom: df₁ = {df_between}, df₂ = {df_within}"),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critical::Source;
    use crate::hypothesis::Verdict;
    use approx::assert_abs_diff_eq;

    fn samples(groups: &[&[f64]]) -> Vec<Sample<f64>> {
        groups.iter().map(|g| Sample::new(g.to_vec())).collect()
    }

    const A: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0];
    const B: &[f64] = &[2.0, 4.0, 6.0, 8.0, 10.0];
    const C: &[f64] = &[1.0, 1.5, 2.0, 2.5, 3.0];

    #[test]
    fn student_independent_known_value() {
        let result = Criterion::Student.run(&samples(&[A, B])).unwrap();
        assert_abs_diff_eq!(result.statistic, 3.0 / 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(result.critical_value.value, 2.306, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);
    }

    #[test]
    fn student_paired_known_value() {
        let result = Criterion::StudentPaired.run(&samples(&[A, B])).unwrap();
        assert_abs_diff_eq!(result.statistic, 3.0 * 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(result.critical_value.value, 2.776, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn identical_samples_do_not_differ() {
        for criterion in [Criterion::Student, Criterion::StudentPaired] {
            let result = criterion.run(&samples(&[B, B])).unwrap();
            assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
            assert_eq!(result.verdict, Verdict::Accept, "{criterion}");
        }
    }

    #[test]
    fn constant_shift_in_pairs_is_infinite() {
        let shifted: Vec<f64> = A.iter().map(|v| v + 1.0).collect();
        let result = Criterion::StudentPaired.run(&samples(&[A, &shifted])).unwrap();
        assert!(result.statistic.is_infinite());
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn anova_known_value() {
        let result = Criterion::Anova.run(&samples(&[A, B, C])).unwrap();
        assert_abs_diff_eq!(result.statistic, (130.0 / 6.0) / 4.375, epsilon = 1e-9);
        assert_eq!(result.critical_value.source, Source::Quantile);
        assert_abs_diff_eq!(result.critical_value.value, 3.885, epsilon = 1e-2);
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn anova_equal_groups() {
        let result = Criterion::Anova.run(&samples(&[A, A, A])).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);
    }
}
