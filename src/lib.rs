//! Format Validator
//!
//! Streaming validation of delimited text rows against per-column rules.
//!
//! This library provides:
//! - Column rules and the groups that bind them to a column
//! - Row splitting and evaluation with error accumulation
//! - A lazy, pull-based validator over any line source
//! - JSON/TOML configuration documents

pub mod config;
pub mod document;
pub mod error;
pub mod rules;
pub mod source;
pub mod validation;

// Re-exports for clean public API
pub use error::ConfigError;
pub use rules::{Rule, ValidatorGroup};
pub use source::{LineSource, LinesSource, ReaderSource, TextSource};
pub use validation::{ColumnError, RowValidationError, RowValidator, Validator};
