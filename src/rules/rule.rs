//! Column Rules
//!
//! A rule is a single predicate over one column value. Rules are fixed at
//! construction and hold no per-call state, so one instance can be shared by
//! every row of a stream.

use std::fmt;

use regex::Regex;

/// A single validation rule for a column value
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must have at least this many characters
    MinLength(usize),
    /// Value must have at most this many characters
    MaxLength(usize),
    /// Value must not be empty
    NotNull,
    /// Value must contain a match for the pattern
    Pattern(Regex),
    /// Value must be a decimal number literal
    Number,
}

impl Rule {
    /// Build a pattern rule, compiling the expression
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Rule::Pattern)
    }

    /// Name of the rule as written in configuration documents
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::MinLength(_) | Rule::MaxLength(_) => "length",
            Rule::NotNull => "notnull",
            Rule::Pattern(_) => "pattern",
            Rule::Number => "number",
        }
    }

    /// Validate a value, returning the failure message on error
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            Rule::MinLength(min) => {
                if value.chars().count() < *min {
                    return Err(format!(
                        "Value '{}' is shorter than the minimum length of {}.",
                        value, min
                    ));
                }
            }
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    return Err(format!(
                        "Value '{}' is longer than the maximum length of {}.",
                        value, max
                    ));
                }
            }
            Rule::NotNull => {
                if value.is_empty() {
                    return Err("Value cannot be empty.".to_string());
                }
            }
            Rule::Pattern(regex) => {
                if !regex.is_match(value) {
                    return Err(format!(
                        "Value '{}' does not match the pattern '{}'.",
                        value,
                        regex.as_str()
                    ));
                }
            }
            Rule::Number => {
                // Out-of-range literals parse to infinity and still count;
                // only the spelled-out inf/NaN forms are rejected.
                let is_number = value.parse::<f64>().is_ok()
                    && value
                        .bytes()
                        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
                if !is_number {
                    return Err(format!("Could not convert '{}' to a number.", value));
                }
            }
        }

        Ok(())
    }

    /// True when the value passes the rule
    pub fn is_valid(&self, value: &str) -> bool {
        self.validate(value).is_ok()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Rule::MinLength(a), Rule::MinLength(b)) => a == b,
            (Rule::MaxLength(a), Rule::MaxLength(b)) => a == b,
            (Rule::NotNull, Rule::NotNull) => true,
            (Rule::Pattern(a), Rule::Pattern(b)) => a.as_str() == b.as_str(),
            (Rule::Number, Rule::Number) => true,
            _ => false,
        }
    }
}

impl Eq for Rule {}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MinLength(min) => write!(f, "length(min={})", min),
            Rule::MaxLength(max) => write!(f, "length(max={})", max),
            Rule::NotNull => f.write_str("notnull"),
            Rule::Pattern(regex) => write!(f, "pattern({})", regex.as_str()),
            Rule::Number => f.write_str("number"),
        }
    }
}
