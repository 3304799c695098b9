//! Column classification and profiling.

mod statistical;

pub use statistical::{ColumnProfiler, format_float};
