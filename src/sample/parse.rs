use crate::error::{Error, Result};

/// Delimiters in the order they are tried.
pub const DELIMITERS: [char; 5] = [',', ';', ' ', '\n', '\t'];

/// Splits `text` on the first delimiter of [`DELIMITERS`] that occurs in it
/// (newline when none does) and parses every non-blank token as a finite `f64`.
///
/// Only one delimiter is ever used: `"1 2\n3"` splits on the space and fails
/// on the token `"2\n3"`. Blank input yields an empty vector.
///
/// # Errors
/// [`Error::Input`] naming the first token that is not a float, or is
/// `nan`/`inf`.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    let delimiter = DELIMITERS
        .into_iter()
        .find(|&d| text.contains(d))
        .unwrap_or('\n');

    text.split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                Ok(_) => Err(Error::input(format!("'{token}' is not a finite number"))),
                Err(_) => Err(Error::input(format!(
                    "'{token}' is not a number; separate values with commas, spaces or line breaks"
                ))),
            }
        })
        .collect()
}
