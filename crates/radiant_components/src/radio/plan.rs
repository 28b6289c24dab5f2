//! What a group renders: entries from its `options` list, or its children.

use super::option::Radio;
use crate::attrs::InlineStyle;
use radiant_core::Result;
use radiant_vdom::VNode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A fully described entry of a group's `options` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOption<V> {
    pub value: V,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "InlineStyle::is_empty")]
    pub style: InlineStyle,
}

impl<V> RadioOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
            style: InlineStyle::default(),
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }
}

/// An entry of a group's `options` list.
///
/// A bare value is shorthand for `{ value, label: value }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry<V> {
    Detailed(RadioOption<V>),
    Shorthand(V),
}

impl<V> From<V> for OptionEntry<V> {
    fn from(value: V) -> Self {
        OptionEntry::Shorthand(value)
    }
}

impl<V> From<RadioOption<V>> for OptionEntry<V> {
    fn from(option: RadioOption<V>) -> Self {
        OptionEntry::Detailed(option)
    }
}

impl<V: DeserializeOwned> OptionEntry<V> {
    /// Parse an options list such as `["a", "b"]` or
    /// `[{"value": 1, "label": "One", "disabled": true}]`.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An explicit child of a group.
#[derive(Debug, Clone)]
pub enum GroupChild<V> {
    /// A radio that reads the group binding.
    Radio(Radio<V>),
    /// Markup rendered untouched.
    Node(VNode),
}

impl<V> From<Radio<V>> for GroupChild<V> {
    fn from(radio: Radio<V>) -> Self {
        GroupChild::Radio(radio)
    }
}

impl<V> From<VNode> for GroupChild<V> {
    fn from(node: VNode) -> Self {
        GroupChild::Node(node)
    }
}

/// The children a group renders in one pass.
#[derive(Debug)]
pub enum RenderPlan<'a, V> {
    /// Radios built from a non-empty `options` list.
    Options(Vec<Radio<V>>),
    /// The group's explicit children, as given.
    Children(&'a [GroupChild<V>]),
}

impl<V> RenderPlan<'_, V> {
    pub fn len(&self) -> usize {
        match self {
            RenderPlan::Options(radios) => radios.len(),
            RenderPlan::Children(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiant_core::OptionValue;

    #[test]
    fn test_shorthand_list_from_json() {
        let entries = OptionEntry::<OptionValue>::list_from_json(r#"["a", "b"]"#).unwrap();
        assert_eq!(
            entries,
            vec![
                OptionEntry::Shorthand(OptionValue::from("a")),
                OptionEntry::Shorthand(OptionValue::from("b")),
            ]
        );
    }

    #[test]
    fn test_detailed_list_from_json() {
        let entries = OptionEntry::<OptionValue>::list_from_json(
            r#"[{"value": 1, "label": "One", "disabled": true, "style": {"color": "red"}}]"#,
        )
        .unwrap();
        match &entries[0] {
            OptionEntry::Detailed(option) => {
                assert_eq!(option.value, OptionValue::Integer(1));
                assert_eq!(option.label, "One");
                assert!(option.disabled);
                assert_eq!(option.style.get("color"), Some("red"));
            }
            other => panic!("Expected detailed entry, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_list_from_json() {
        let entries =
            OptionEntry::<OptionValue>::list_from_json(r#"[7, {"value": "x", "label": "X"}]"#)
                .unwrap();
        assert!(matches!(entries[0], OptionEntry::Shorthand(OptionValue::Integer(7))));
        assert!(matches!(entries[1], OptionEntry::Detailed(_)));
    }

    #[test]
    fn test_decimal_shorthand_list_from_json() {
        let entries = OptionEntry::<OptionValue>::list_from_json("[1.5, 2]").unwrap();
        assert_eq!(
            entries,
            vec![
                OptionEntry::Shorthand(OptionValue::Float(1.5)),
                OptionEntry::Shorthand(OptionValue::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_malformed_list_is_an_error() {
        assert!(OptionEntry::<OptionValue>::list_from_json(r#"[{"label": "no value"}]"#).is_err());
    }
}
