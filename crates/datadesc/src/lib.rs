//! datadesc: generate dataset description (`.names`) files from tabular data.
//!
//! A names file documents a dataset in the style long used by public
//! machine-learning repositories: its size, the values each attribute takes,
//! how many cells are missing, and how the rows split across the values of
//! every categorical column.
//!
//! # Example
//!
//! ```no_run
//! use datadesc::Describer;
//!
//! let describer = Describer::open("data/external/cars.csv").unwrap();
//!
//! println!("Instances: {}", describer.instance_count());
//! let written = describer.write_to("docs/datasets").unwrap();
//! println!("Wrote {}", written.display());
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod report;
pub mod schema;

mod describer;

pub use crate::describer::{Describer, DescriberConfig, NAMES_EXTENSION, dataset_name_from_path};
pub use error::{DatadescError, Result};
pub use inference::ColumnProfiler;
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use report::NamesReport;
pub use schema::{ColumnKind, ColumnProfile};
