//! Request and response bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::hypothesis::{Arity, Criterion};
use crate::sample::Sample;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Body of `/solve` and `/calculate/{criterion}`.
///
/// Sample fields (`data`, `data1`, `x_data`, ...) are free text or arrays of
/// numbers and are collected by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Criterion identifier; the path segment wins on `/calculate`.
    #[serde(default)]
    pub problem_type: Option<String>,
    /// `"independent"` (default) or `"paired"`; the latter turns the Student
    /// test into its paired form.
    #[serde(default)]
    pub test_type: Option<String>,
    /// How many numbered groups to read, as a number or numeric string.
    #[serde(default)]
    pub k: Option<Value>,
    /// Groups given as one array instead of numbered fields.
    #[serde(default)]
    pub groups: Option<Vec<Value>>,
    /// All remaining fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl SolveRequest {
    /// Resolves the criterion from `name` (or `problem_type`) and `test_type`.
    pub fn criterion(&self, name: Option<&str>) -> Result<Criterion> {
        let name = name
            .or(self.problem_type.as_deref())
            .ok_or_else(|| Error::input("problem_type is required"))?;
        let criterion: Criterion = name.parse()?;
        let paired = match self.test_type.as_deref().map(str::trim) {
            None => false,
            Some(t) if t.eq_ignore_ascii_case("independent") => false,
            Some(t) if t.eq_ignore_ascii_case("paired") => true,
            Some(t) => {
                return Err(Error::input(format!(
                    "test_type must be 'independent' or 'paired', got '{t}'"
                )));
            }
        };
        Ok(match criterion {
            Criterion::Student if paired => Criterion::StudentPaired,
            other => other,
        })
    }

    /// Parses the fields `criterion` reads, in order.
    pub fn samples(&self, criterion: Criterion) -> Result<Vec<Sample<f64>>> {
        match criterion.arity() {
            Arity::One => Ok(vec![self.required("data")?]),
            Arity::Paired if matches!(criterion, Criterion::Spearman | Criterion::Pearson) => {
                Ok(vec![
                    self.either("x_data", "data1")?,
                    self.either("y_data", "data2")?,
                ])
            }
            Arity::Two | Arity::Paired => {
                Ok(vec![self.required("data1")?, self.required("data2")?])
            }
            Arity::Groups => self.groups(),
        }
    }

    fn groups(&self) -> Result<Vec<Sample<f64>>> {
        if let Some(groups) = &self.groups {
            return groups
                .iter()
                .enumerate()
                .map(|(i, v)| to_sample(&format!("groups[{i}]"), v))
                .collect();
        }

        match self.group_count()? {
            Some(k) => (1..=k).map(|i| self.required(&format!("data{i}"))).collect(),
            None => (1..)
                .map(|i| format!("data{i}"))
                .map_while(|name| self.field(&name).map(|v| to_sample(&name, v)))
                .collect(),
        }
    }

    fn group_count(&self) -> Result<Option<usize>> {
        let invalid = |v: &Value| Error::input(format!("k must be a positive integer, got {v}"));
        match &self.k {
            None | Some(Value::Null) => Ok(None),
            Some(v @ Value::Number(n)) => n
                .as_u64()
                .map(|k| Some(k as usize))
                .ok_or_else(|| invalid(v)),
            Some(v @ Value::String(s)) => {
                s.trim().parse().map(Some).map_err(|_| invalid(v))
            }
            Some(v) => Err(invalid(v)),
        }
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    fn required(&self, name: &str) -> Result<Sample<f64>> {
        let value = self
            .field(name)
            .ok_or_else(|| Error::input(format!("Field '{name}' is required")))?;
        to_sample(name, value)
    }

    fn either(&self, name: &str, fallback: &str) -> Result<Sample<f64>> {
        match (self.field(name), self.field(fallback)) {
            (Some(value), _) => to_sample(name, value),
            (None, Some(value)) => to_sample(fallback, value),
            (None, None) => Err(Error::input(format!("Field '{name}' is required"))),
        }
    }
}

/// Delimited text or an array of numbers.
fn to_sample(name: &str, value: &Value) -> Result<Sample<f64>> {
    match value {
        Value::String(text) => Sample::parse(text),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_f64().ok_or_else(|| {
                    Error::input(format!("Field '{name}' contains a non-numeric value: {item}"))
                })
            })
            .collect(),
        Value::Number(n) => n
            .as_f64()
            .map(|v| Sample::new(vec![v]))
            .ok_or_else(|| Error::input(format!("Field '{name}' is not a finite number"))),
        other => Err(Error::input(format!(
            "Field '{name}' must be delimited text or an array of numbers, got {other}"
        ))),
    }
}

/// Body of `/generate_data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Criterion identifier
    pub criterion: String,
    /// Sample or group size
    #[serde(default)]
    pub n: Option<usize>,
    /// Size of the first sample
    #[serde(default)]
    pub n1: Option<usize>,
    /// Size of the second sample
    #[serde(default)]
    pub n2: Option<usize>,
    /// Number of groups
    #[serde(default)]
    pub k: Option<usize>,
    /// Seed for reproducible data
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Generated sample fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Field name to values, ready to post back to `/solve`
    pub data: BTreeMap<String, Vec<f64>>,
    /// Human-readable summary
    pub message: String,
}
