//! Names-file rendering.
//!
//! The report is one fixed template. Sections 2 to 4 are static boilerplate
//! for the dataset author to replace; every other section is derived from
//! the column profiles of a single loaded table.

mod sections;
mod template;

pub use sections::{ELLIPSIS, attribute_values, class_distribution, percentage};
pub use template::{NamesReport, SECTION_RULE};
