//! Row Validator
//!
//! Splits a raw row on the delimiter and runs each bound column's group.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::{ColumnError, RowValidationError};
use crate::error::ConfigError;
use crate::rules::ValidatorGroup;

/// Delimiter used when none (or an empty one) is configured
pub const DEFAULT_DELIMITER: &str = ",";

/// What to do when a row has fewer columns than a binding refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingColumns {
    /// Skip rules for columns the row does not have
    #[default]
    Skip,
    /// Report one error per bound column the row does not have
    Report,
}

/// Validates rows column by column
#[derive(Debug, Clone)]
pub struct RowValidator {
    delimiter: String,
    columns: BTreeMap<usize, ValidatorGroup>,
    missing_columns: MissingColumns,
    errors: Vec<ColumnError>,
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowValidator {
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(delimiter: &str) -> Self {
        let mut validator = Self {
            delimiter: String::new(),
            columns: BTreeMap::new(),
            missing_columns: MissingColumns::default(),
            errors: Vec::new(),
        };
        validator.set_delimiter(delimiter);
        validator
    }

    /// Set the column delimiter, falling back to a comma when empty
    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.delimiter = if delimiter.is_empty() {
            DEFAULT_DELIMITER.to_string()
        } else {
            delimiter.to_string()
        };
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn set_missing_columns(&mut self, policy: MissingColumns) {
        self.missing_columns = policy;
    }

    pub fn missing_columns(&self) -> MissingColumns {
        self.missing_columns
    }

    /// Bind a group to a 1-based column index.
    ///
    /// Binding an index that already has a group appends the new rules to it.
    pub fn add_column_validator(
        &mut self,
        column: usize,
        group: impl Into<ValidatorGroup>,
    ) -> Result<(), ConfigError> {
        if column == 0 {
            return Err(ConfigError::InvalidColumnIndex(column.to_string()));
        }

        let group = group.into();
        log::debug!("Binding {} rule(s) to column {}", group.len(), column);
        self.columns
            .entry(column)
            .or_default()
            .extend(group.into_rules());
        Ok(())
    }

    pub fn column_validators(&self) -> &BTreeMap<usize, ValidatorGroup> {
        &self.columns
    }

    /// Evaluate a row and return its failures, leaving the buffer untouched.
    ///
    /// Errors are ordered by ascending column, then by rule order.
    pub fn check(&self, row: &str) -> Vec<ColumnError> {
        let values: Vec<&str> = row.split(self.delimiter.as_str()).collect();
        let mut errors = Vec::new();

        for (&column, group) in &self.columns {
            match values.get(column - 1) {
                Some(value) => errors.extend(
                    group
                        .evaluate(value)
                        .into_iter()
                        .map(|message| ColumnError::new(column, message)),
                ),
                None if self.missing_columns == MissingColumns::Report => {
                    errors.push(ColumnError::new(
                        column,
                        format!("Column {} is missing from the row.", column),
                    ));
                }
                None => {}
            }
        }

        errors
    }

    /// Evaluate a row into the error buffer; true when it has no failures
    pub fn is_valid(&mut self, row: &str) -> bool {
        self.errors = self.check(row);
        self.errors.is_empty()
    }

    /// Failures recorded by the most recent `is_valid` call
    pub fn errors(&self) -> &[ColumnError] {
        &self.errors
    }

    /// Move the buffered failures into a row error, clearing the buffer.
    ///
    /// The row number is left at 0 for the caller to assign.
    pub fn take_error(&mut self) -> Option<RowValidationError> {
        if self.errors.is_empty() {
            return None;
        }
        Some(RowValidationError::new(0, std::mem::take(&mut self.errors)))
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
