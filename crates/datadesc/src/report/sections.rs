//! Formatters for the derived report sections.

use std::fmt::Write;

use crate::schema::ColumnProfile;

use super::template::SECTION_RULE;

/// Marker appended when a column's value list is truncated.
pub const ELLIPSIS: &str = "...";

/// One line per column listing its distinct values.
///
/// Columns with more than `max_listed` distinct values show the first
/// `max_listed - 1` followed by [`ELLIPSIS`].
pub fn attribute_values(profiles: &[ColumnProfile], max_listed: usize) -> String {
    let mut out = String::new();

    for profile in profiles {
        let mut listed: Vec<&str> = profile.distinct_values().collect();
        if listed.len() > max_listed {
            listed.truncate(max_listed.saturating_sub(1));
            listed.push(ELLIPSIS);
        }
        let _ = writeln!(out, "   {}: {}", profile.name, listed.join(", "));
    }

    out
}

/// Per-value counts and percentages for every categorical column.
pub fn class_distribution(profiles: &[ColumnProfile], instance_count: usize) -> String {
    let mut out = String::new();

    for profile in profiles.iter().filter(|p| p.kind.is_categorical()) {
        let _ = write!(out, "\n{}\n", SECTION_RULE);
        let _ = writeln!(
            out,
            "\n   class      {name}          {name}[%]",
            name = profile.name
        );
        for (value, &count) in &profile.value_counts {
            let _ = writeln!(
                out,
                "   {} {} ({:.2} %)",
                value,
                count,
                percentage(count, instance_count)
            );
        }
    }

    out
}

/// Share of `count` in `total`, in percent. Zero when the table is empty.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
