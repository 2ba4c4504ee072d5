//! Tests for loading validator configuration from files
use std::fs;

use format_validator::validation::MissingColumns;
use format_validator::{ConfigError, Rule, Validator};

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{ "columnSeperator": "|", "columns": { "2": [{ "type": "number" }] } }"#,
    )
    .expect("write config");

    let validator = Validator::from_path(&path).expect("load config");
    assert_eq!(validator.column_separator(), "|");
    assert_eq!(validator.row_separator(), "\r\n");
    assert_eq!(validator.column_validators()[&2].rules(), &[Rule::Number]);
}

#[test]
fn test_load_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rules.TOML");
    fs::write(
        &path,
        r#"
rowSeparator = "\n"
missingColumns = "report"

[[columns.1]]
type = "length"
min = 2
max = 4
"#,
    )
    .expect("write config");

    let mut validator = Validator::from_path(&path).expect("load config");
    assert_eq!(validator.row_separator(), "\n");
    assert_eq!(
        validator.column_validators()[&1].rules(),
        &[Rule::MinLength(2), Rule::MaxLength(4)]
    );

    validator.add_column_validator(3, Rule::NotNull).unwrap();
    let errors: Vec<_> = validator
        .validate("ab,x\nabcde,y,z\n")
        .collect::<std::io::Result<_>>()
        .expect("in-memory source");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].errors[0].message, "Column 3 is missing from the row.");
    assert_eq!(errors[1].columns(), vec![1]);
}

#[test]
fn test_missing_columns_default_is_skip() {
    let validator = Validator::from_json("{}").expect("build validator");
    assert!(validator.column_validators().is_empty());

    let mut validator = Validator::new();
    validator.set_missing_columns(MissingColumns::Skip);
    validator.add_column_validator(3, Rule::NotNull).unwrap();
    assert_eq!(validator.validate("a,b").count(), 0);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Validator::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_unsupported_extension() {
    let err = Validator::from_path("rules.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn test_configuration_errors_fail_at_construction() {
    let unknown_rule = r#"{ "columns": { "1": [{ "type": "uppercase" }] } }"#;
    assert!(matches!(
        Validator::from_json(unknown_rule),
        Err(ConfigError::Json(_))
    ));

    let bad_index = r#"{ "columns": { "0": [{ "type": "notnull" }] } }"#;
    assert!(matches!(
        Validator::from_json(bad_index),
        Err(ConfigError::InvalidColumnIndex(_))
    ));

    let bad_toml = "columns = 3";
    assert!(matches!(
        Validator::from_toml(bad_toml),
        Err(ConfigError::Toml(_))
    ));
}
