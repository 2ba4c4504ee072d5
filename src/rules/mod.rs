//! Column Rules
//!
//! Leaf predicates and the groups that bind them to a column.

pub mod group;
pub mod rule;

pub use group::ValidatorGroup;
pub use rule::Rule;
