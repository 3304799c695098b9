//! Statistical profiling: value domain inference and distinct-value counting.

use indexmap::IndexMap;
use tracing::trace;

use crate::input::DataTable;
use crate::schema::{ColumnKind, ColumnProfile};

/// Text used for missing cells when none is configured.
const DEFAULT_MISSING_MARKER: &str = "nan";

/// Classification of a single non-missing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Integer,
    Float,
    Boolean,
    Text,
}

/// Classifies columns and counts their distinct values.
pub struct ColumnProfiler {
    /// Rendered form of a missing cell.
    missing_marker: String,
}

impl ColumnProfiler {
    /// Create a profiler that renders missing cells as `nan`.
    pub fn new() -> Self {
        Self {
            missing_marker: DEFAULT_MISSING_MARKER.to_string(),
        }
    }

    /// Override the text used for missing cells.
    pub fn with_missing_marker(mut self, marker: impl Into<String>) -> Self {
        self.missing_marker = marker.into();
        self
    }

    /// Profile every column of the table, in column order.
    pub fn profile_table(&self, table: &DataTable) -> Vec<ColumnProfile> {
        (0..table.column_count())
            .map(|index| self.profile_column(table, index))
            .collect()
    }

    /// Classify a column and count its rendered values.
    pub fn profile_column(&self, table: &DataTable, col_index: usize) -> ColumnProfile {
        let values: Vec<&str> = table.column_values(col_index).collect();
        let kind = infer_kind(&values);

        let mut missing_count = 0;
        let mut value_counts: IndexMap<String, usize> = IndexMap::new();
        for &value in &values {
            if DataTable::is_null_value(value) {
                missing_count += 1;
            }
            *value_counts.entry(self.render_value(kind, value)).or_insert(0) += 1;
        }

        let name = table.headers[col_index].clone();
        trace!(
            column = %name,
            kind = %kind,
            distinct = value_counts.len(),
            missing = missing_count,
            "profiled column"
        );

        ColumnProfile {
            name,
            position: col_index,
            kind,
            missing_count,
            value_counts,
        }
    }

    /// Render a raw cell the way it appears in the report.
    pub fn render_value(&self, kind: ColumnKind, raw: &str) -> String {
        if DataTable::is_null_value(raw) {
            return self.missing_marker.clone();
        }

        let trimmed = raw.trim();
        match kind {
            ColumnKind::Integer => trimmed
                .parse::<i64>()
                .map(|v| v.to_string())
                .unwrap_or_else(|_| raw.to_string()),
            ColumnKind::Float => parse_number(trimmed)
                .map(format_float)
                .unwrap_or_else(|| raw.to_string()),
            ColumnKind::Boolean => match parse_bool(trimmed) {
                Some(true) => "True".to_string(),
                Some(false) => "False".to_string(),
                None => raw.to_string(),
            },
            ColumnKind::Text => raw.to_string(),
        }
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Decide the column kind from all of its cells.
///
/// Integers survive only without missing cells, and booleans likewise; a
/// column that is entirely missing is numeric. A column without any cells
/// at all is text.
fn infer_kind(values: &[&str]) -> ColumnKind {
    if values.is_empty() {
        return ColumnKind::Text;
    }

    let mut has_missing = false;
    let mut seen_integer = false;
    let mut seen_float = false;
    let mut seen_boolean = false;

    for &value in values {
        if DataTable::is_null_value(value) {
            has_missing = true;
            continue;
        }
        match detect_value_kind(value) {
            ValueKind::Integer => seen_integer = true,
            ValueKind::Float => seen_float = true,
            ValueKind::Boolean => seen_boolean = true,
            ValueKind::Text => return ColumnKind::Text,
        }
    }

    let seen_number = seen_integer || seen_float;
    match (seen_number, seen_boolean) {
        (true, true) => ColumnKind::Text,
        (false, true) if has_missing => ColumnKind::Text,
        (false, true) => ColumnKind::Boolean,
        _ if seen_float || has_missing => ColumnKind::Float,
        _ => ColumnKind::Integer,
    }
}

/// Detect the kind of a single non-missing value.
fn detect_value_kind(value: &str) -> ValueKind {
    let trimmed = value.trim();

    if parse_bool(trimmed).is_some() {
        return ValueKind::Boolean;
    }

    if trimmed.parse::<i64>().is_ok() {
        return ValueKind::Integer;
    }

    if parse_number(trimmed).is_some() {
        return ValueKind::Float;
    }

    ValueKind::Text
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

/// Parse a decimal number; NaN spellings that are not missing tokens stay text.
fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Shortest round-trip form of a float with at least one fractional digit.
///
/// Very large and very small magnitudes switch to exponent notation with a
/// signed, two-digit exponent (`1e+20`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        };
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
