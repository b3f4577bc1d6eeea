//! Classical criteria, one independent formula per [`Criterion`].

mod correlation;
mod mean;
mod outliers;
mod rank;
mod result;
mod variance;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sample::Sample;

pub use result::{TestResult, Verdict};

/// Formula shared by every criterion: parsed samples in, decision out.
pub type Formula = fn(&[Sample<f64>]) -> Result<TestResult>;

/// Shape of the input a criterion expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A single sample.
    One,
    /// Two independent samples.
    Two,
    /// Two samples of equal length whose elements are paired.
    Paired,
    /// Two or more groups.
    Groups,
}

/// Identifier of a statistical criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Maximum normed deviation (Smirnov-Grubbs) outlier test.
    Smirnov,
    /// Interquartile-range outlier screen.
    #[serde(alias = "iqr")]
    Hortley,
    /// Fisher's F-test for equal variances.
    Fisher,
    /// Student's t-test for independent samples.
    Student,
    /// Student's t-test for paired samples.
    StudentPaired,
    /// Siegel-Tukey rank test for equal dispersion.
    SiegelTukey,
    /// Mann-Whitney U test.
    MannWhitney,
    /// Spearman rank correlation.
    Spearman,
    /// Pearson correlation.
    Pearson,
    /// Cochran's G test for homogeneity of variances.
    Cochran,
    /// Bartlett's test for homogeneity of variances.
    Bartlett,
    /// One-way analysis of variance.
    Anova,
}

impl Criterion {
    /// Every criterion, in presentation order.
    pub const ALL: [Criterion; 12] = [
        Criterion::Smirnov,
        Criterion::Hortley,
        Criterion::Fisher,
        Criterion::Student,
        Criterion::StudentPaired,
        Criterion::SiegelTukey,
        Criterion::MannWhitney,
        Criterion::Spearman,
        Criterion::Pearson,
        Criterion::Cochran,
        Criterion::Bartlett,
        Criterion::Anova,
    ];

    /// Wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Smirnov => "smirnov",
            Criterion::Hortley => "hortley",
            Criterion::Fisher => "fisher",
            Criterion::Student => "student",
            Criterion::StudentPaired => "student_paired",
            Criterion::SiegelTukey => "siegel_tukey",
            Criterion::MannWhitney => "mann_whitney",
            Criterion::Spearman => "spearman",
            Criterion::Pearson => "pearson",
            Criterion::Cochran => "cochran",
            Criterion::Bartlett => "bartlett",
            Criterion::Anova => "anova",
        }
    }

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        match self {
            Criterion::Smirnov => "Smirnov-Grubbs maximum normed deviation test",
            Criterion::Hortley => "Interquartile range outlier screen",
            Criterion::Fisher => "Fisher's F-test",
            Criterion::Student => "Two-sample Student's t-test (independent samples)",
            Criterion::StudentPaired => "Paired Student's t-test",
            Criterion::SiegelTukey => "Siegel-Tukey test",
            Criterion::MannWhitney => "Mann-Whitney U test",
            Criterion::Spearman => "Spearman rank correlation",
            Criterion::Pearson => "Pearson correlation",
            Criterion::Cochran => "Cochran's G test",
            Criterion::Bartlett => "Bartlett's test",
            Criterion::Anova => "One-way analysis of variance (ANOVA)",
        }
    }

    /// Input shape.
    pub fn arity(self) -> Arity {
        match self {
            Criterion::Smirnov | Criterion::Hortley => Arity::One,
            Criterion::Fisher
            | Criterion::Student
            | Criterion::SiegelTukey
            | Criterion::MannWhitney => Arity::Two,
            Criterion::StudentPaired | Criterion::Spearman | Criterion::Pearson => Arity::Paired,
            Criterion::Cochran | Criterion::Bartlett | Criterion::Anova => Arity::Groups,
        }
    }

    /// Minimum number of observations in every sample.
    pub fn min_size(self) -> usize {
        match self {
            Criterion::Hortley => 4,
            Criterion::Smirnov | Criterion::Spearman | Criterion::Pearson => 3,
            _ => 2,
        }
    }

    /// Wording of the `(accepted, rejected)` null hypothesis.
    pub fn hypotheses(self) -> (&'static str, &'static str) {
        match self {
            Criterion::Smirnov => (
                "No outliers: the hypothesis of normality is ACCEPTED",
                "Outliers present: the hypothesis of normality is REJECTED",
            ),
            Criterion::Hortley => ("No outliers detected", "Outliers detected"),
            Criterion::Fisher | Criterion::SiegelTukey => (
                "The hypothesis of equal variances is ACCEPTED",
                "The hypothesis of equal variances is REJECTED",
            ),
            Criterion::Student | Criterion::StudentPaired => (
                "The hypothesis of equal means is ACCEPTED",
                "The hypothesis of equal means is REJECTED",
            ),
            Criterion::MannWhitney => (
                "The hypothesis of equal distributions is ACCEPTED",
                "The hypothesis of equal distributions is REJECTED",
            ),
            Criterion::Spearman | Criterion::Pearson => (
                "The correlation is NOT significant",
                "The correlation is statistically SIGNIFICANT",
            ),
            Criterion::Cochran | Criterion::Bartlett => (
                "The hypothesis of homogeneous variances is ACCEPTED",
                "The hypothesis of homogeneous variances is REJECTED",
            ),
            Criterion::Anova => (
                "No significant differences between groups",
                "Significant differences between groups",
            ),
        }
    }

    /// The formula implementing this criterion.
    pub fn formula(self) -> Formula {
        match self {
            Criterion::Smirnov => outliers::smirnov,
            Criterion::Hortley => outliers::interquartile,
            Criterion::Fisher => variance::fisher,
            Criterion::Student => mean::student,
            Criterion::StudentPaired => mean::student_paired,
            Criterion::SiegelTukey => variance::siegel_tukey,
            Criterion::MannWhitney => rank::mann_whitney,
            Criterion::Spearman => correlation::spearman,
            Criterion::Pearson => correlation::pearson,
            Criterion::Cochran => variance::cochran,
            Criterion::Bartlett => variance::bartlett,
            Criterion::Anova => mean::anova,
        }
    }

    /// Checks the input shape and runs the formula.
    ///
    /// # Errors
    /// [`Error::Input`] when the samples do not fit [`Criterion::arity`] or
    /// [`Criterion::min_size`]; [`Error::Computation`] for degenerate data
    /// the formula cannot resolve.
    pub fn run(self, samples: &[Sample<f64>]) -> Result<TestResult> {
        self.validate(samples)?;
        let result = (self.formula())(samples)?;
        debug!(
            criterion = self.as_str(),
            statistic = result.statistic,
            critical = result.critical_value.value,
            verdict = ?result.verdict,
            "criterion evaluated"
        );
        Ok(result)
    }

    fn validate(self, samples: &[Sample<f64>]) -> Result<()> {
        let min = self.min_size();
        match self.arity() {
            Arity::One if samples.len() != 1 => {
                return Err(Error::input(format!(
                    "{} takes one sample, got {}",
                    self.title(),
                    samples.len()
                )));
            }
            Arity::Two | Arity::Paired if samples.len() != 2 => {
                return Err(Error::input(format!(
                    "{} takes two samples, got {}",
                    self.title(),
                    samples.len()
                )));
            }
            Arity::Groups if samples.len() < 2 => {
                return Err(Error::input("The number of groups must be at least 2"));
            }
            _ => {}
        }

        if let (Arity::Paired, [x, y]) = (self.arity(), samples) {
            if x.len() != y.len() {
                return Err(Error::input(format!(
                    "Paired samples must have the same length ({} vs {})",
                    x.len(),
                    y.len()
                )));
            }
        }

        for (i, sample) in samples.iter().enumerate() {
            if sample.len() < min {
                let what = match self.arity() {
                    Arity::One => "The sample".to_string(),
                    Arity::Groups => format!("Group {}", i + 1),
                    Arity::Two | Arity::Paired => format!("Sample {}", i + 1),
                };
                return Err(Error::input(format!(
                    "{what} must contain at least {min} values, got {}",
                    sample.len()
                )));
            }
        }
        Ok(())
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().replace('-', "_");
        if name.eq_ignore_ascii_case("iqr") {
            return Ok(Criterion::Hortley);
        }
        Criterion::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&name))
            .ok_or_else(|| Error::input(format!("Unknown criterion '{s}'")))
    }
}

fn single(samples: &[Sample<f64>]) -> Result<&Sample<f64>> {
    match samples {
        [x] => Ok(x),
        _ => Err(Error::input(format!("expected one sample, got {}", samples.len()))),
    }
}

fn pair(samples: &[Sample<f64>]) -> Result<(&Sample<f64>, &Sample<f64>)> {
    match samples {
        [x, y] => Ok((x, y)),
        _ => Err(Error::input(format!("expected two samples, got {}", samples.len()))),
    }
}

/// Words a correlation coefficient's magnitude.
fn strength(coefficient: f64) -> &'static str {
    let r = coefficient.abs();
    if r > 0.7 {
        "strong"
    } else if r > 0.3 {
        "moderate"
    } else {
        "weak"
    }
}

/// Formats a list of values with four decimals.
fn list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{v:.4}")).collect();
    format!("[{}]", items.join(", "))
}
