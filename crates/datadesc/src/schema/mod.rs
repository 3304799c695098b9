//! Column classification and per-column profiles.

mod column;
mod types;

pub use column::ColumnProfile;
pub use types::ColumnKind;
