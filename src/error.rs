//! Error types shared by the parser, the criteria and the front ends.

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between raw user input and a verdict.
#[derive(Debug, Error)]
pub enum Error {
    /// Unparseable, missing or undersized input.
    #[error("Input error: {0}")]
    Input(String),

    /// Degenerate numeric case the formula cannot handle.
    #[error("Computation error: {0}")]
    Computation(String),

    /// I/O error while reading a sample or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV sample file.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Error::Input(msg.into())
    }

    pub(crate) fn computation(msg: impl Into<String>) -> Self {
        Error::Computation(msg.into())
    }

    /// Whether the error was caused by the caller's input rather than the numbers themselves.
    pub fn is_input(&self) -> bool {
        !matches!(self, Error::Computation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_prefixed_by_kind() {
        assert_eq!(
            Error::input("sample is empty").to_string(),
            "Input error: sample is empty"
        );
        assert_eq!(
            Error::computation("zero variance").to_string(),
            "Computation error: zero variance"
        );
    }

    #[test]
    fn only_computation_errors_are_not_input() {
        assert!(Error::input("x").is_input());
        assert!(!Error::computation("x").is_input());
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.is_input());
    }
}
