//! Validation Errors
//!
//! Column-level failures and the per-row aggregate handed to callers.

use std::fmt;

/// One failing rule on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnError {
    /// 1-based column index
    pub column: usize,
    pub message: String,
}

impl ColumnError {
    pub fn new(column: usize, message: impl Into<String>) -> Self {
        Self {
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}: {}", self.column, self.message)
    }
}

/// All column failures found in a single row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValidationError {
    /// 1-based row number, counting any header row
    pub row: usize,
    pub errors: Vec<ColumnError>,
}

impl RowValidationError {
    pub fn new(row: usize, errors: Vec<ColumnError>) -> Self {
        Self { row, errors }
    }

    /// Distinct columns that failed, in ascending order
    pub fn columns(&self) -> Vec<usize> {
        let mut columns: Vec<usize> = self.errors.iter().map(|e| e.column).collect();
        columns.dedup();
        columns
    }
}

impl fmt::Display for RowValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Row {}: {}", self.row, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for RowValidationError {}
