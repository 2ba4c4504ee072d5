//! Configuration Converter
//!
//! Turns a parsed configuration document into ready-to-use rules.

use std::collections::BTreeMap;

use super::schema::{RuleDescriptor, ValidatorConfiguration};
use crate::error::ConfigError;
use crate::rules::Rule;
use crate::validation::MissingColumns;

/// Rules and settings derived from a configuration document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertedValidators {
    pub column_separator: String,
    pub row_separator: String,
    pub has_header_row: bool,
    pub missing_columns: MissingColumns,
    pub columns: BTreeMap<usize, Vec<Rule>>,
}

/// Converts a configuration document into `ConvertedValidators`
#[derive(Debug)]
pub struct ConfigurationConverter {
    configuration: ValidatorConfiguration,
}

impl ConfigurationConverter {
    pub fn new(configuration: ValidatorConfiguration) -> Self {
        Self { configuration }
    }

    /// Build every rule, failing on the first invalid entry
    pub fn convert(self) -> Result<ConvertedValidators, ConfigError> {
        let config = self.configuration;
        let mut columns: BTreeMap<usize, Vec<Rule>> = BTreeMap::new();

        for (key, descriptors) in config.columns {
            let column = parse_column_index(&key)?;
            let mut rules = Vec::with_capacity(descriptors.len());
            for descriptor in descriptors {
                convert_descriptor(column, descriptor, &mut rules)?;
            }
            columns.entry(column).or_default().extend(rules);
        }

        log::debug!(
            "Converted configuration with {} bound column(s)",
            columns.len()
        );

        Ok(ConvertedValidators {
            column_separator: config.column_separator.unwrap_or_default(),
            row_separator: config.row_separator.unwrap_or_default(),
            has_header_row: config.has_header_row,
            missing_columns: config.missing_columns,
            columns,
        })
    }
}

fn parse_column_index(key: &str) -> Result<usize, ConfigError> {
    match key.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ConfigError::InvalidColumnIndex(key.to_string())),
    }
}

fn convert_descriptor(
    column: usize,
    descriptor: RuleDescriptor,
    rules: &mut Vec<Rule>,
) -> Result<(), ConfigError> {
    match descriptor {
        RuleDescriptor::Length { min, max } => {
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(ConfigError::InvalidLengthRange { column, min, max });
                }
            }
            if min.is_none() && max.is_none() {
                return Err(ConfigError::EmptyLengthRule { column });
            }
            rules.extend(min.map(Rule::MinLength));
            rules.extend(max.map(Rule::MaxLength));
        }
        RuleDescriptor::NotNull => rules.push(Rule::NotNull),
        RuleDescriptor::Pattern { value } => {
            let rule = Rule::pattern(&value)
                .map_err(|source| ConfigError::InvalidPattern { column, source })?;
            rules.push(rule);
        }
        RuleDescriptor::Number => rules.push(Rule::Number),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(json: &str) -> Result<ConvertedValidators, ConfigError> {
        let configuration = ValidatorConfiguration::from_json(json)?;
        ConfigurationConverter::new(configuration).convert()
    }

    #[test]
    fn test_convert_rules_in_order() {
        let converted = convert(
            r#"{
                "columnSeparator": "|",
                "hasHeaderRow": true,
                "columns": {
                    "10": [{ "type": "number" }],
                    "2": [
                        { "type": "notnull" },
                        { "type": "length", "min": 2, "max": 8 },
                        { "type": "pattern", "value": "^a" }
                    ]
                }
            }"#,
        )
        .expect("convert");

        assert_eq!(converted.column_separator, "|");
        assert_eq!(converted.row_separator, "");
        assert!(converted.has_header_row);
        assert_eq!(converted.columns.keys().copied().collect::<Vec<_>>(), vec![2, 10]);
        assert_eq!(
            converted.columns[&2],
            vec![
                Rule::NotNull,
                Rule::MinLength(2),
                Rule::MaxLength(8),
                Rule::pattern("^a").unwrap(),
            ]
        );
        assert_eq!(converted.columns[&10], vec![Rule::Number]);
    }

    #[test]
    fn test_equivalent_keys_are_merged() {
        let converted = convert(
            r#"{ "columns": { "3": [{ "type": "notnull" }], "03": [{ "type": "number" }] } }"#,
        )
        .expect("convert");

        assert_eq!(converted.columns.len(), 1);
        assert_eq!(converted.columns[&3].len(), 2);
    }

    #[test]
    fn test_invalid_column_index() {
        for key in ["0", "-1", "first"] {
            let json = format!(r#"{{ "columns": {{ "{key}": [{{ "type": "notnull" }}] }} }}"#);
            let err = convert(&json).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidColumnIndex(ref k) if k == key),
                "unexpected error for {key}: {err}"
            );
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let err = convert(r#"{ "columns": { "1": [{ "type": "pattern", "value": "(" }] } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { column: 1, .. }));
    }

    #[test]
    fn test_invalid_length_rules() {
        let err = convert(r#"{ "columns": { "4": [{ "type": "length" }] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLengthRule { column: 4 }));

        let err = convert(r#"{ "columns": { "4": [{ "type": "length", "min": 5, "max": 2 }] } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidLengthRange {
                column: 4,
                min: 5,
                max: 2
            }
        ));
    }

    #[test]
    fn test_parse_error_surfaces_as_config_error() {
        let err = convert("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
