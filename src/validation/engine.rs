//! Validation Engine
//!
//! Streams rows from a line source through a `RowValidator`, yielding one
//! error per failing row.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use super::error::RowValidationError;
use super::row::{MissingColumns, RowValidator};
use crate::document::{ConfigurationConverter, ConvertedValidators, ValidatorConfiguration};
use crate::error::ConfigError;
use crate::rules::ValidatorGroup;
use crate::source::LineSource;

/// Row separator used until one is configured
pub const DEFAULT_ROW_SEPARATOR: &str = "\r\n";

/// Streaming validator over delimited rows
#[derive(Debug, Clone)]
pub struct Validator {
    row_validator: RowValidator,
    row_separator: String,
    has_header_row: bool,
    total_rows_checked: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            row_validator: RowValidator::new(),
            row_separator: DEFAULT_ROW_SEPARATOR.to_string(),
            has_header_row: false,
            total_rows_checked: 0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_configuration(ValidatorConfiguration::from_json(json)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::from_configuration(ValidatorConfiguration::from_toml(text)?)
    }

    /// Load a `.json` or `.toml` configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        log::debug!("Loading validator configuration from {}", path.display());
        match extension.as_deref() {
            Some("json") => Self::from_json(&read()?),
            Some("toml") => Self::from_toml(&read()?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_configuration(configuration: ValidatorConfiguration) -> Result<Self, ConfigError> {
        let converted = ConfigurationConverter::new(configuration).convert()?;
        Self::from_converted(converted)
    }

    /// Build a validator from converted rules, consuming them
    pub fn from_converted(converted: ConvertedValidators) -> Result<Self, ConfigError> {
        let mut validator = Self::new();
        validator.set_column_separator(&converted.column_separator);
        validator.set_row_separator(&converted.row_separator);
        validator.set_has_header_row(converted.has_header_row);
        validator.set_missing_columns(converted.missing_columns);

        for (column, rules) in converted.columns {
            validator.add_column_validator(column, rules)?;
        }

        Ok(validator)
    }

    /// Set the column delimiter; empty falls back to a comma
    pub fn set_column_separator(&mut self, separator: &str) {
        self.row_validator.set_delimiter(separator);
    }

    /// Set the row separator; empty keeps the current one
    pub fn set_row_separator(&mut self, separator: &str) {
        if !separator.is_empty() {
            self.row_separator = separator.to_string();
        }
    }

    pub fn set_has_header_row(&mut self, has_header_row: bool) {
        self.has_header_row = has_header_row;
    }

    pub fn set_missing_columns(&mut self, policy: MissingColumns) {
        self.row_validator.set_missing_columns(policy);
    }

    pub fn add_column_validator(
        &mut self,
        column: usize,
        group: impl Into<ValidatorGroup>,
    ) -> Result<(), ConfigError> {
        self.row_validator.add_column_validator(column, group)
    }

    pub fn column_separator(&self) -> &str {
        self.row_validator.delimiter()
    }

    pub fn row_separator(&self) -> &str {
        &self.row_separator
    }

    pub fn has_header_row(&self) -> bool {
        self.has_header_row
    }

    pub fn column_validators(&self) -> &BTreeMap<usize, ValidatorGroup> {
        self.row_validator.column_validators()
    }

    /// Lines read so far, including any header row
    pub fn total_rows_checked(&self) -> usize {
        self.total_rows_checked
    }

    /// Lazily validate every row of `source`.
    ///
    /// Rows are read only as the returned iterator is advanced. A source I/O
    /// error is yielded once and ends the stream.
    pub fn validate<S: LineSource>(&mut self, source: S) -> RowErrors<'_, S::Lines> {
        let lines = source.read_lines(&self.row_separator);
        RowErrors {
            skip_header: self.has_header_row,
            validator: self,
            lines,
            finished: false,
        }
    }
}

/// Lazy stream of row errors produced by [`Validator::validate`]
#[derive(Debug)]
pub struct RowErrors<'a, L> {
    validator: &'a mut Validator,
    lines: L,
    skip_header: bool,
    finished: bool,
}

impl<L> Iterator for RowErrors<'_, L>
where
    L: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<RowValidationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    log::warn!(
                        "Stopped reading after row {}: {}",
                        self.validator.total_rows_checked,
                        e
                    );
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };

            self.validator.total_rows_checked += 1;
            let row = self.validator.total_rows_checked;

            if std::mem::take(&mut self.skip_header) {
                log::trace!("Skipping header row {}", row);
                continue;
            }

            let errors = self.validator.row_validator.check(&line);
            if !errors.is_empty() {
                log::trace!("Row {} failed with {} error(s)", row, errors.len());
                return Some(Ok(RowValidationError::new(row, errors)));
            }
        }
    }
}
