//! Validation Engine
//!
//! Row evaluation and the streaming facade built on top of it.

pub mod engine;
pub mod error;
pub mod row;

pub use engine::{RowErrors, Validator, DEFAULT_ROW_SEPARATOR};
pub use error::{ColumnError, RowValidationError};
pub use row::{MissingColumns, RowValidator, DEFAULT_DELIMITER};
