//! Main Describer struct and public API.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DatadescError, Result};
use crate::inference::ColumnProfiler;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::report::{self, NamesReport};
use crate::schema::ColumnProfile;

/// File extension of generated reports.
pub const NAMES_EXTENSION: &str = "names";

/// Configuration for dataset description.
#[derive(Debug, Clone)]
pub struct DescriberConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Columns with more distinct values than this are listed truncated.
    pub max_listed_values: usize,
}

impl Default for DescriberConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            max_listed_values: 10,
        }
    }
}

/// Describes a single tabular file.
///
/// The table is read and every column profiled once, in [`Describer::load`].
/// All accessors read from that snapshot.
#[derive(Debug, Clone)]
pub struct Describer {
    config: DescriberConfig,
    input_path: PathBuf,
    source: SourceMetadata,
    table: DataTable,
    profiles: Vec<ColumnProfile>,
}

impl Describer {
    /// Load and profile a file with default configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path, DescriberConfig::default())
    }

    /// Load and profile a file with custom configuration.
    pub fn load(path: impl AsRef<Path>, config: DescriberConfig) -> Result<Self> {
        let path = path.as_ref();

        let parser = Parser::with_config(config.parser.clone());
        let (table, source) = parser.parse_file(path)?;
        let profiles = ColumnProfiler::new().profile_table(&table);

        debug!(
            file = %source.file,
            hash = %source.hash,
            size_bytes = source.size_bytes,
            categorical = profiles.iter().filter(|p| p.kind.is_categorical()).count(),
            "loaded dataset"
        );

        Ok(Self {
            config,
            input_path: path.to_path_buf(),
            source,
            table,
            profiles,
        })
    }

    /// Dataset name derived from the input path.
    pub fn dataset_name(&self) -> String {
        dataset_name_from_path(&self.input_path.to_string_lossy())
    }

    /// Number of rows.
    pub fn instance_count(&self) -> usize {
        self.table.row_count()
    }

    /// Number of columns.
    pub fn attribute_count(&self) -> usize {
        self.table.column_count()
    }

    /// Missing cells across the whole table.
    pub fn missing_count(&self) -> usize {
        self.profiles.iter().map(|p| p.missing_count).sum()
    }

    /// Section 7 body: one line of distinct values per column.
    pub fn attribute_values(&self) -> String {
        report::attribute_values(&self.profiles, self.config.max_listed_values)
    }

    /// Section 9 body: value breakdowns for textual and boolean columns.
    pub fn class_distribution(&self) -> String {
        report::class_distribution(&self.profiles, self.instance_count())
    }

    /// Per-column profiles, in column order.
    pub fn profiles(&self) -> &[ColumnProfile] {
        &self.profiles
    }

    /// Metadata about the loaded file.
    pub fn source(&self) -> &SourceMetadata {
        &self.source
    }

    /// Gather every template field.
    pub fn report(&self) -> NamesReport {
        NamesReport {
            title: self.dataset_name(),
            instances: self.instance_count(),
            attributes: self.attribute_count(),
            attribute_values: self.attribute_values(),
            missing: self.missing_count(),
            class_distribution: self.class_distribution(),
        }
    }

    /// The complete names-file text.
    pub fn render(&self) -> String {
        self.report().to_string()
    }

    /// Path of the report inside `output_dir`.
    pub fn output_path(&self, output_dir: impl AsRef<Path>) -> PathBuf {
        output_dir
            .as_ref()
            .join(format!("{}.{}", self.dataset_name(), NAMES_EXTENSION))
    }

    /// Write the report to `<output_dir>/<dataset name>.names`, replacing any
    /// existing file. The directory must already exist.
    pub fn write_to(&self, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        let path = self.output_path(output_dir);

        // Rendered up front so a failure here never leaves a partial file
        let text = self.render();

        if !output_dir.is_dir() {
            return Err(DatadescError::Write {
                path,
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("output directory '{}' does not exist", output_dir.display()),
                ),
            });
        }

        fs::write(&path, text).map_err(|source| DatadescError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "wrote dataset description");
        Ok(path)
    }
}

impl fmt::Display for Describer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(), f)
    }
}

/// Base name of `path` without its extension.
///
/// Splits on both `/` and `\`, then drops everything from the last `.`.
/// A leading dot alone does not start an extension, so `.hidden` stays
/// `.hidden`.
pub fn dataset_name_from_path(path: &str) -> String {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);

    match base.rfind('.') {
        Some(idx) if idx > 0 => base[..idx].to_string(),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn describe(content: &str) -> Describer {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        Describer::open(file.path()).unwrap()
    }

    #[test]
    fn test_dataset_name_from_path() {
        assert_eq!(
            dataset_name_from_path("data/external/CurrentPopulationSurvey.csv"),
            "CurrentPopulationSurvey"
        );
        assert_eq!(dataset_name_from_path("cars.csv"), "cars");
        assert_eq!(dataset_name_from_path("C:\\data\\cars.tsv"), "cars");
        assert_eq!(dataset_name_from_path("data/cars.v2.csv"), "cars.v2");
        assert_eq!(dataset_name_from_path("data/cars"), "cars");
        assert_eq!(dataset_name_from_path("data/.hidden"), ".hidden");
    }

    #[test]
    fn test_counts() {
        let describer = describe("color,price\nred,10\nred,20\nblue,\n");

        assert_eq!(describer.instance_count(), 3);
        assert_eq!(describer.attribute_count(), 2);
        assert_eq!(describer.missing_count(), 1);
    }

    #[test]
    fn test_no_missing() {
        let describer = describe("a,b\n1,x\n2,y\n");
        assert_eq!(describer.missing_count(), 0);
    }

    #[test]
    fn test_display_matches_render() {
        let describer = describe("a\nx\n");
        assert_eq!(describer.to_string(), describer.render());
    }

    #[test]
    fn test_custom_listing_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"n\n1\n2\n3\n4\n").unwrap();
        let config = DescriberConfig {
            max_listed_values: 3,
            ..DescriberConfig::default()
        };
        let describer = Describer::load(file.path(), config).unwrap();

        assert_eq!(describer.attribute_values(), "   n: 1, 2, ...\n");
    }

    #[test]
    fn test_output_path() {
        let describer = describe("a\nx\n");
        let name = describer.dataset_name();

        assert_eq!(
            describer.output_path("docs/datasets/"),
            PathBuf::from(format!("docs/datasets/{name}.names"))
        );
    }
}
