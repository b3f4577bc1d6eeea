//! Correlation between paired samples.

use super::{Criterion, TestResult, pair, strength};
use crate::critical;
use crate::error::Result;
use crate::sample::Sample;
use crate::statistics::{Mean, Ranks, StdDev, Statistic};

/// Significance of a correlation coefficient,
/// `t = r·√((n - 2) / (1 - r²))`, infinite for `|r| = 1`.
fn t_statistic(r: f64, n: usize) -> f64 {
    let denom = 1.0 - r * r;
    if denom > 0.0 {
        r * ((n - 2) as f64 / denom).sqrt()
    } else {
        f64::INFINITY.copysign(r)
    }
}

fn direction(r: f64) -> &'static str {
    if r >= 0.0 { "positive" } else { "negative" }
}

/// Shared tail of both correlation criteria: Student's t on `n - 2` df,
/// rejected two-sided.
fn decide(
    criterion: Criterion,
    (name, r): (&'static str, f64),
    n: usize,
    mut details: Vec<String>,
) -> Result<TestResult> {
    let t = t_statistic(r, n);
    let df = n - 2;
    let critical = critical::student(df)?;

    details.push(format!("t-statistic: t = {t:.4}"));
    details.push(format!("Degrees of freedom: df = {df}"));
    details.push(format!("Relationship: {} {}", strength(r), direction(r)));

    Ok(TestResult::decide(criterion, ("t", t), critical, t.abs() > critical.value, details)
        .with_solution(format!("{name} = {r:.4}")))
}

/// Pearson's product-moment coefficient; zero when either sample is constant.
pub(super) fn pearson(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x, y) = pair(samples)?;
    let n = x.len();

    let (mean_x, sd_x): (f64, f64) = (Mean, StdDev::default()).compute(x);
    let (mean_y, sd_y): (f64, f64) = (Mean, StdDev::default()).compute(y);
    let covariance = x
        .data
        .iter()
        .zip(&y.data)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / (n - 1) as f64;
    let r = if sd_x > 0.0 && sd_y > 0.0 {
        (covariance / (sd_x * sd_y)).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    decide(
        Criterion::Pearson,
        ("r", r),
        n,
        vec![
            format!("Number of pairs: n = {n}"),
            format!("Means: x̄ = {mean_x:.4}, ȳ = {mean_y:.4}"),
            format!("Standard deviations: sₓ = {sd_x:.4}, sᵧ = {sd_y:.4}"),
            format!("Covariance: {covariance:.4}"),
            format!("Correlation coefficient: r = {r:.4}"),
        ],
    )
    .map(|result| result.with_extra("r", r))
}

/// Spearman's `ρ = 1 - 6Σd² / (n(n² - 1))` over average ranks.
pub(super) fn spearman(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x, y) = pair(samples)?;
    let n = x.len();

    let rank_x: Vec<f64> = Ranks.compute(x);
    let rank_y: Vec<f64> = Ranks.compute(y);
    let d_squared: f64 = rank_x
        .iter()
        .zip(&rank_y)
        .map(|(a, b)| (a - b).powi(2))
        .sum();
    let nf = n as f64;
    let rho = (1.0 - 6.0 * d_squared / (nf * (nf * nf - 1.0))).clamp(-1.0, 1.0);

    decide(
        Criterion::Spearman,
        ("ρ", rho),
        n,
        vec![
            format!("Number of pairs: n = {n}"),
            format!("Sum of squared rank differences: Σd² = {d_squared:.4}"),
            format!("Spearman's coefficient: ρ = {rho:.4}"),
        ],
    )
    .map(|result| result.with_extra("rho", rho))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Verdict;
    use approx::assert_abs_diff_eq;

    fn run(c: Criterion, x: &[f64], y: &[f64]) -> TestResult {
        c.run(&[Sample::new(x.to_vec()), Sample::new(y.to_vec())]).unwrap()
    }

    const X: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    const Y: &[f64] = &[2.0, 1.0, 4.0, 3.0, 6.0, 5.0, 8.0, 7.0];

    #[test]
    fn spearman_known_value() {
        let result = run(Criterion::Spearman, X, Y);
        assert_abs_diff_eq!(result.extra["rho"], 1.0 - 48.0 / 504.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.statistic, 5.2034, epsilon = 1e-3);
        assert_abs_diff_eq!(result.critical_value.value, 2.447, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Reject);
        assert!(result.details.iter().any(|d| d == "Relationship: strong positive"));
    }

    #[test]
    fn pearson_matches_spearman_on_ranks() {
        let pearson = run(Criterion::Pearson, X, Y);
        let spearman = run(Criterion::Spearman, X, Y);
        assert_abs_diff_eq!(pearson.extra["r"], spearman.extra["rho"], epsilon = 1e-12);
        assert_eq!(pearson.solution, "r = 0.9048");
    }

    #[test]
    fn pearson_moderate_not_significant() {
        let result = run(
            Criterion::Pearson,
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            &[3.0, 1.0, 4.0, 1.0, 5.0, 9.0],
        );
        assert_abs_diff_eq!(result.extra["r"], 0.69617, epsilon = 1e-4);
        assert_abs_diff_eq!(result.statistic, 1.9395, epsilon = 1e-3);
        assert_eq!(result.verdict, Verdict::Accept);
        assert!(result.details.iter().any(|d| d == "Relationship: moderate positive"));
    }

    #[test]
    fn perfect_correlation_is_not_an_error() {
        let y: Vec<f64> = X.iter().map(|v| -2.0 * v).collect();
        for c in [Criterion::Pearson, Criterion::Spearman] {
            let result = run(c, X, &y);
            assert!(result.statistic < -1e6, "{c}: t = {}", result.statistic);
            assert_eq!(result.verdict, Verdict::Reject);
        }
    }

    #[test]
    fn constant_sample_has_zero_correlation() {
        let result = run(Criterion::Pearson, X, &[4.0; 8]);
        assert_abs_diff_eq!(result.extra["r"], 0.0, epsilon = 1e-15);
        assert_eq!(result.verdict, Verdict::Accept);
    }
}
