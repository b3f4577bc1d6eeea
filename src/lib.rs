//! Classical statistical hypothesis criteria at α = 0.05.
//!
//! Samples are parsed from delimited text, a criterion computes its statistic,
//! compares it with a tabulated (or quantile-derived) critical value and
//! returns a [`TestResult`] with the verdict and a worded explanation. The
//! same criteria are served over HTTP by [`api`] and from the command line.
//!
//! ```
//! use stat_criteria::{Criterion, Sample, Verdict};
//!
//! let samples = [
//!     Sample::parse("1, 2, 3, 4, 5").unwrap(),
//!     Sample::parse("2 4 6 8 10").unwrap(),
//! ];
//! let result = Criterion::Fisher.run(&samples).unwrap();
//! assert_eq!(result.verdict, Verdict::Accept);
//! ```

pub mod api;
pub mod config;
pub mod critical;
mod display;
pub mod error;
pub mod generate;
pub mod hypothesis;
pub mod sample;
pub mod statistics;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::generate::{Generated, Sizes, generate};
pub use crate::hypothesis::*;
pub use crate::sample::{Sample, parse_numbers};
pub use crate::statistics::*;
pub use rand;
