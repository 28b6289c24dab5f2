//! Selection value types
//!
//! Selectable components are generic over a single value type per instance.
//! Any `Clone + PartialEq + Display` type qualifies; `Display` provides the
//! rendered `value` attribute and the label of shorthand options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can identify the selected entry of a group.
pub trait SelectionValue: Clone + PartialEq + fmt::Display {}

impl<T> SelectionValue for T where T: Clone + PartialEq + fmt::Display {}

/// A heterogeneous option value, as found in declarative option lists.
///
/// Variants never compare equal across types: `Integer(1)` and
/// `String("1")` are different selections, and so are `Integer(2)` and
/// `Float(2.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    /// Any number with a fractional part, e.g. `1.5`.
    Float(f64),
    String(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Integer(i) => write!(f, "{i}"),
            OptionValue::Float(fl) => write!(f, "{fl}"),
            OptionValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Integer(i)
    }
}

impl From<f64> for OptionValue {
    fn from(fl: f64) -> Self {
        OptionValue::Float(fl)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// Who owns the selected value of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// The caller supplies the value; the component only reflects it.
    Controlled,
    /// The component owns the value, seeded by a default.
    Uncontrolled,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Controlled => write!(f, "controlled"),
            SelectionMode::Uncontrolled => write!(f, "uncontrolled"),
        }
    }
}
