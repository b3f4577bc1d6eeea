//! Rank-based location criteria.

use super::{Criterion, TestResult, pair};
use crate::critical;
use crate::error::Result;
use crate::sample::Sample;
use crate::statistics::{Ranks, Statistic};

/// Mann-Whitney U with the normal approximation.
///
/// `U = min(U₁, U₂)` and the decision is two-sided on
/// `z = (U - n₁n₂/2) / √(n₁n₂(N + 1)/12)`; tied values get average ranks.
pub(super) fn mann_whitney(samples: &[Sample<f64>]) -> Result<TestResult> {
    let (x1, x2) = pair(samples)?;
    let (n1, n2) = (x1.len(), x2.len());
    let n = n1 + n2;

    let combined: Vec<f64> = x1.data.iter().chain(&x2.data).copied().collect();
    let ranks: Vec<f64> = Ranks.compute(&combined);
    let (r1, r2): (f64, f64) = (ranks[..n1].iter().sum(), ranks[n1..].iter().sum());

    let u1 = r1 - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = r2 - (n2 * (n2 + 1)) as f64 / 2.0;
    let u = u1.min(u2);

    let expected = (n1 * n2) as f64 / 2.0;
    let std_dev = ((n1 * n2 * (n + 1)) as f64 / 12.0).sqrt();
    let z = (u - expected) / std_dev;

    let critical = critical::normal_two_sided();
    Ok(TestResult::decide(
        Criterion::MannWhitney,
        ("Z", z),
        critical,
        z.abs() > critical.value,
        vec![
            format!("Sample 1: n₁ = {n1}, rank sum R₁ = {r1:.1}"),
            format!("Sample 2: n₂ = {n2}, rank sum R₂ = {r2:.1}"),
            format!("U₁ = {u1:.1}, U₂ = {u2:.1}"),
            format!("U = min(U₁, U₂) = {u:.1}"),
            format!("Expected value: E(U) = {expected:.4}"),
            format!("Standard deviation: σ(U) = {std_dev:.4}"),
        ],
    )
    .with_solution(format!("U = {u:.4}, Z = {z:.4}"))
    .with_extra("u", u)
    .with_extra("u1", u1)
    .with_extra("u2", u2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Verdict;
    use approx::assert_abs_diff_eq;

    fn run(x: &[f64], y: &[f64]) -> TestResult {
        Criterion::MannWhitney
            .run(&[Sample::new(x.to_vec()), Sample::new(y.to_vec())])
            .unwrap()
    }

    const A: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn overlapping_samples_with_ties() {
        let result = run(A, &[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_abs_diff_eq!(result.extra["u1"], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.extra["u2"], 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.extra["u"], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.statistic, -7.5 / (275.0_f64 / 12.0).sqrt(), epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);
        assert_eq!(result.solution, format!("U = 5.0000, Z = {:.4}", result.statistic));
    }

    #[test]
    fn separated_samples_reject() {
        let result = run(A, &[10.0, 11.0, 12.0, 13.0, 14.0]);
        assert_abs_diff_eq!(result.extra["u"], 0.0, epsilon = 1e-12);
        assert!(result.statistic < -1.96);
        assert_eq!(result.verdict, Verdict::Reject);
    }

    #[test]
    fn u_values_sum_to_product_of_sizes() {
        let result = run(&[3.1, 0.4, 2.2, 7.5], &[1.0, 5.5, 2.2, 6.0, 9.9, 0.1]);
        assert_abs_diff_eq!(result.extra["u1"] + result.extra["u2"], 24.0, epsilon = 1e-12);
    }

    #[test]
    fn identical_samples_are_centred() {
        let result = run(A, A);
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_eq!(result.verdict, Verdict::Accept);
    }
}
