//! Configuration Documents
//!
//! Reading validator configuration from JSON or TOML and converting it into
//! column rules.

pub mod convert;
pub mod schema;

pub use convert::{ConfigurationConverter, ConvertedValidators};
pub use schema::{RuleDescriptor, ValidatorConfiguration};
