//! Validator Groups
//!
//! An ordered set of rules evaluated together against one column value.

use super::rule::Rule;

/// Ordered collection of rules bound to a single column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorGroup {
    rules: Vec<Rule>,
}

impl ValidatorGroup {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Append a rule to the end of the group
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Run every rule against the value and collect all failure messages.
    ///
    /// Messages follow rule registration order. An empty result means the
    /// value passed.
    pub fn evaluate(&self, value: &str) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(value).err())
            .collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<Rule>> for ValidatorGroup {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl From<Rule> for ValidatorGroup {
    fn from(rule: Rule) -> Self {
        Self::new(vec![rule])
    }
}

impl FromIterator<Rule> for ValidatorGroup {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Rule> for ValidatorGroup {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
