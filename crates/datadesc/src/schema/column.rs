//! Column profile: the statistics every report section reads from.

use indexmap::IndexMap;
use serde::Serialize;

use super::types::ColumnKind;

/// Everything the report needs to know about one column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Classified value domain.
    pub kind: ColumnKind,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Distinct rendered values and their occurrence counts, in first-observed order.
    pub value_counts: IndexMap<String, usize>,
}

impl ColumnProfile {
    /// Number of distinct values, including the missing marker when present.
    pub fn distinct_count(&self) -> usize {
        self.value_counts.len()
    }

    /// Distinct values in first-observed order.
    pub fn distinct_values(&self) -> impl Iterator<Item = &str> {
        self.value_counts.keys().map(|v| v.as_str())
    }

    /// Total number of cells in the column.
    pub fn cell_count(&self) -> usize {
        self.value_counts.values().sum()
    }
}
