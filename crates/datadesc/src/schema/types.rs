//! Core type definitions for column classification.

use serde::Serialize;

/// Value domain of a column, decided once when the table is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Whole numbers with no missing cells.
    Integer,
    /// Numbers with a decimal part, or integers interrupted by missing cells.
    Float,
    /// Boolean literals with no missing cells.
    Boolean,
    /// Anything else.
    Text,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    /// Returns true if values are discrete labels that get a class distribution.
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnKind::Boolean | ColumnKind::Text)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Boolean => write!(f, "boolean"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_categorical_partition() {
        for kind in [
            ColumnKind::Integer,
            ColumnKind::Float,
            ColumnKind::Boolean,
            ColumnKind::Text,
        ] {
            assert_ne!(kind.is_numeric(), kind.is_categorical(), "{kind}");
        }
    }
}
