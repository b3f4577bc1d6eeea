use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Criterion;
use crate::critical::{ALPHA, CriticalValue};

/// Decision about the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The statistic stays within the critical value.
    Accept,
    /// The statistic exceeds the critical value.
    Reject,
}

impl Verdict {
    /// `Reject` when the statistic exceeds its critical value.
    pub fn from_exceeds(exceeds: bool) -> Self {
        if exceeds { Verdict::Reject } else { Verdict::Accept }
    }

    /// Whether the null hypothesis was rejected.
    pub fn is_reject(self) -> bool {
        self == Verdict::Reject
    }
}

/// Outcome of one criterion on one request.
///
/// Non-finite statistics serialise as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Which criterion produced this result.
    pub criterion: Criterion,
    /// Human-readable name of the criterion.
    pub title: String,
    /// Symbol of the statistic, e.g. `"F"`.
    pub statistic_name: &'static str,
    /// Computed statistic.
    pub statistic: f64,
    /// Threshold the statistic is compared against.
    pub critical_value: CriticalValue,
    /// Accept/reject decision at [`ALPHA`].
    pub verdict: Verdict,
    /// The verdict in words.
    pub hypothesis: String,
    /// One-line summary, e.g. `"F = 2.1250"`.
    pub solution: String,
    /// Explanation lines, ending with the critical value and the verdict.
    pub details: Vec<String>,
    /// Secondary named values (`z`, `t`, quartiles, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<&'static str, f64>,
    /// Observations flagged as outliers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outliers: Vec<f64>,
}

impl TestResult {
    /// Compares `statistic` against `critical_value` and words the decision.
    ///
    /// `exceeds` is the criterion's own rejection rule (one- or two-sided).
    pub fn decide(
        criterion: Criterion,
        (statistic_name, statistic): (&'static str, f64),
        critical_value: CriticalValue,
        exceeds: bool,
        details: Vec<String>,
    ) -> Self {
        let verdict = Verdict::from_exceeds(exceeds);
        let (accepted, rejected) = criterion.hypotheses();
        let hypothesis = match verdict {
            Verdict::Accept => accepted,
            Verdict::Reject => rejected,
        }
        .to_string();

        let mut details = details;
        details.push(format!("Critical value (α = {ALPHA}): {critical_value}"));
        details.push(hypothesis.clone());

        Self {
            criterion,
            title: criterion.title().to_string(),
            statistic_name,
            statistic,
            critical_value,
            verdict,
            hypothesis,
            solution: format!("{statistic_name} = {statistic:.4}"),
            details,
            extra: BTreeMap::new(),
            outliers: Vec::new(),
        }
    }

    /// Records a secondary value.
    #[must_use]
    pub fn with_extra(mut self, name: &'static str, value: f64) -> Self {
        self.extra.insert(name, value);
        self
    }

    /// Records the observations flagged as outliers.
    #[must_use]
    pub fn with_outliers(mut self, outliers: Vec<f64>) -> Self {
        self.outliers = outliers;
        self
    }

    /// Replaces the one-line summary.
    #[must_use]
    pub fn with_solution(mut self, solution: String) -> Self {
        self.solution = solution;
        self
    }
}
