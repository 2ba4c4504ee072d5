//! Configuration Document Types
//!
//! Serde types mirroring the JSON/TOML configuration document.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::validation::MissingColumns;

/// Root configuration document
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfiguration {
    #[serde(default, alias = "columnSeperator")]
    pub column_separator: Option<String>,
    #[serde(default, alias = "rowSeperator")]
    pub row_separator: Option<String>,
    #[serde(default)]
    pub has_header_row: bool,
    #[serde(default)]
    pub missing_columns: MissingColumns,
    /// Column index (as written in the document) to its rule list
    #[serde(default)]
    pub columns: BTreeMap<String, Vec<RuleDescriptor>>,
}

/// One rule entry within a column
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RuleDescriptor {
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    NotNull,
    Pattern {
        value: String,
    },
    Number,
}

impl ValidatorConfiguration {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
