//! Data source abstraction and metadata.

use std::collections::HashSet;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Cell contents that count as a missing value.
///
/// Matching is exact and case-sensitive, so `Na` or `none` are ordinary text.
static MISSING_TOKENS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ]
    .into_iter()
    .collect()
});

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
        }
    }
}

/// Represents parsed tabular data.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        MISSING_TOKENS.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_value() {
        assert!(DataTable::is_null_value(""));
        assert!(DataTable::is_null_value("NA"));
        assert!(DataTable::is_null_value("N/A"));
        assert!(DataTable::is_null_value("n/a"));
        assert!(DataTable::is_null_value("null"));
        assert!(DataTable::is_null_value("NULL"));
        assert!(DataTable::is_null_value("NaN"));
        assert!(DataTable::is_null_value("<NA>"));
        assert!(!DataTable::is_null_value("na"));
        assert!(!DataTable::is_null_value("none"));
        assert!(!DataTable::is_null_value("."));
        assert!(!DataTable::is_null_value("value"));
        assert!(!DataTable::is_null_value("0"));
    }

    #[test]
    fn test_column_access() {
        let table = DataTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "x".into()], vec!["2".into(), "y".into()]],
            b',',
        );

        assert_eq!(table.column_by_name("b"), Some(vec!["x", "y"]));
        assert_eq!(table.column_by_name("missing"), None);
        assert_eq!(table.get(1, 0), Some("2"));
        assert_eq!(table.get(2, 0), None);
    }

    #[test]
    fn test_source_metadata_file_name() {
        let meta = SourceMetadata::new(
            PathBuf::from("data/raw/cars.csv"),
            "sha256:00".to_string(),
            42,
            "csv".to_string(),
            3,
            2,
        );
        assert_eq!(meta.file, "cars.csv");
    }
}
