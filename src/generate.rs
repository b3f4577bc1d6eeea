//! Synthetic samples shaped for each criterion.

use std::collections::BTreeMap;

use rand::Rng;
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hypothesis::{Arity, Criterion};
use crate::sample::Sample;

/// Largest sample or group size [`generate`] draws.
pub const MAX_SIZE: usize = 100_000;

/// Largest number of groups [`generate`] draws.
pub const MAX_GROUPS: usize = 100;

/// Requested sample sizes; `n1`/`n2` default to `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sizes {
    /// Size of each sample, or of each group.
    pub n: usize,
    /// Size of the first of two samples.
    pub n1: Option<usize>,
    /// Size of the second of two samples.
    pub n2: Option<usize>,
    /// Number of groups for multi-group criteria.
    pub k: usize,
}

impl Default for Sizes {
    fn default() -> Self {
        Self { n: 10, n1: None, n2: None, k: 3 }
    }
}

/// Named sample fields, keyed the way the solve endpoint reads them back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generated {
    /// Criterion the data was shaped for.
    pub criterion: Criterion,
    /// `data`, `data1`/`data2`, `x_data`/`y_data` or `data1..=datak`.
    pub fields: BTreeMap<String, Vec<f64>>,
}

impl Generated {
    /// The fields as samples, in the order the criterion expects them.
    pub fn samples(&self) -> Vec<Sample<f64>> {
        let names: Vec<String> = match self.criterion.arity() {
            Arity::One => vec!["data".into()],
            Arity::Two => vec!["data1".into(), "data2".into()],
            Arity::Paired if is_correlation(self.criterion) => {
                vec!["x_data".into(), "y_data".into()]
            }
            Arity::Paired => vec!["data1".into(), "data2".into()],
            Arity::Groups => (1..=self.fields.len()).map(|i| format!("data{i}")).collect(),
        };
        names
            .iter()
            .filter_map(|name| self.fields.get(name))
            .map(|values| Sample::new(values.clone()))
            .collect()
    }
}

fn is_correlation(criterion: Criterion) -> bool {
    matches!(criterion, Criterion::Spearman | Criterion::Pearson)
}

/// Draws data for `criterion`, rounded to `decimals` places:
///
/// * one sample: `N(0, 1)`;
/// * two samples: `N(0, 1)` and `N(0.5, 1.2)`, paired Student forcing equal sizes;
/// * correlation: `x ~ N(0, 1)`, `y = 0.7x + N(0, 0.3)`;
/// * groups: group `i` (from 0) drawn from `N(0.5i, 1 + 0.2i)`, all of size `n`.
///
/// # Errors
/// [`Error::Input`] if a size is below the criterion's minimum or above
/// [`MAX_SIZE`], or the group count is outside `2..=`[`MAX_GROUPS`].
pub fn generate<R: Rng + ?Sized>(
    criterion: Criterion,
    sizes: Sizes,
    decimals: u32,
    rng: &mut R,
) -> Result<Generated> {
    let min = criterion.min_size();
    let check = |what: &str, size: usize| {
        if size < min {
            Err(Error::input(format!(
                "{what} must be at least {min} for {}, got {size}",
                criterion.title()
            )))
        } else if size > MAX_SIZE {
            Err(Error::input(format!("{what} must be at most {MAX_SIZE}, got {size}")))
        } else {
            Ok(size)
        }
    };

    let mut fields: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    match criterion.arity() {
        Arity::One => {
            let n = check("n", sizes.n)?;
            fields.insert("data".into(), draw(rng, 0.0, 1.0, n)?);
        }
        Arity::Two => {
            let n1 = check("n1", sizes.n1.unwrap_or(sizes.n))?;
            let n2 = check("n2", sizes.n2.unwrap_or(sizes.n))?;
            fields.insert("data1".into(), draw(rng, 0.0, 1.0, n1)?);
            fields.insert("data2".into(), draw(rng, 0.5, 1.2, n2)?);
        }
        Arity::Paired if is_correlation(criterion) => {
            let n = check("n", sizes.n)?;
            let x = draw(rng, 0.0, 1.0, n)?;
            let noise = draw(rng, 0.0, 0.3, n)?;
            let y = x.iter().zip(&noise).map(|(x, e)| 0.7 * x + e).collect();
            fields.insert("x_data".into(), x);
            fields.insert("y_data".into(), y);
        }
        Arity::Paired => {
            let n = check("n", sizes.n)?;
            fields.insert("data1".into(), draw(rng, 0.0, 1.0, n)?);
            fields.insert("data2".into(), draw(rng, 0.5, 1.2, n)?);
        }
        Arity::Groups => {
            if sizes.k < 2 {
                return Err(Error::input("The number of groups must be at least 2"));
            }
            if sizes.k > MAX_GROUPS {
                return Err(Error::input(format!(
                    "The number of groups must be at most {MAX_GROUPS}, got {}",
                    sizes.k
                )));
            }
            let n = check("n", sizes.n)?;
            for i in 0..sizes.k {
                let i_f = i as f64;
                fields.insert(format!("data{}", i + 1), draw(rng, 0.5 * i_f, 1.0 + 0.2 * i_f, n)?);
            }
        }
    }

    for values in fields.values_mut() {
        round_in_place(values, decimals);
    }
    debug!(criterion = criterion.as_str(), fields = fields.len(), "generated data");
    Ok(Generated { criterion, fields })
}

fn draw<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64, n: usize) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| Error::computation(format!("N({mean}, {std_dev}): {e}")))?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

fn round_in_place(values: &mut [f64], decimals: u32) {
    let scale = 10_f64.powi(decimals.min(15) as i32);
    for v in values {
        *v = (*v * scale).round() / scale;
    }
}
