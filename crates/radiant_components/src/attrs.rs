//! Attribute helpers shared by components

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attributes forwarded verbatim to a component's root element. The whole
/// name is matched so nothing past the prefix can carry markup.
static DATA_OR_ARIA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(data-[A-Za-z0-9_.:-]+|aria-[a-z]+|role)$").unwrap());

pub fn is_data_or_aria(name: &str) -> bool {
    DATA_OR_ARIA_RE.is_match(name)
}

/// Keep only `data-*`, `aria-*` and `role` from a free-form attribute map.
pub fn data_or_aria_attrs(
    attrs: &IndexMap<String, String>,
) -> impl Iterator<Item = (&String, &String)> {
    attrs.iter().filter(|(name, _)| is_data_or_aria(name))
}

/// Inline CSS declarations, emitted as a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineStyle(IndexMap<String, String>);

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// The declarations as an attribute value, or `None` when empty.
    pub fn to_attr(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}
