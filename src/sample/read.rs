use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::Sample;
use crate::error::{Error, Result};

impl Sample<f64> {
    /// Reads one sample per CSV column.
    ///
    /// The header row names the columns. Columns may have different lengths:
    /// blank cells are skipped, and rows may be shorter than the header.
    ///
    /// # Errors
    /// I/O and CSV errors, [`Error::Input`] for a non-numeric cell or a file
    /// without data rows.
    pub fn read_columns<P: AsRef<Path>>(path: P) -> Result<Vec<(String, Self)>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)?;

        let mut columns: Vec<(String, Self)> = rdr
            .headers()?
            .iter()
            .map(|name| (name.to_string(), Self::default()))
            .collect();

        let mut rows = 0;
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            rows += 1;
            for ((name, sample), cell) in columns.iter_mut().zip(record.iter()) {
                if cell.is_empty() {
                    continue;
                }
                let value = cell
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        Error::input(format!(
                            "column '{name}', row {}: '{cell}' is not a finite number",
                            line + 1
                        ))
                    })?;
                sample.data.push(value);
            }
        }

        if rows == 0 {
            return Err(Error::input("CSV file contains no data records"));
        }

        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn reads_ragged_columns() {
        let file = csv_file("before,after\n1.0,2.0\n2.5,3.5\n4.0,\n");
        let columns = Sample::read_columns(file.path()).unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].0, "before");
        assert_eq!(columns[0].1.data, vec![1.0, 2.5, 4.0]);
        assert_eq!(columns[1].1.data, vec![2.0, 3.5]);
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let file = csv_file("x\n1\nabc\n");
        let err = Sample::read_columns(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 2"), "{err}");
    }

    #[test]
    fn rejects_non_finite_cells() {
        let file = csv_file("x,y\n1,2\n3,NaN\n");
        let err = Sample::read_columns(file.path()).unwrap_err();
        assert!(err.to_string().contains("column 'y', row 2"), "{err}");
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = csv_file("x,y\n");
        assert!(matches!(Sample::read_columns(file.path()), Err(Error::Input(_))));
    }
}
