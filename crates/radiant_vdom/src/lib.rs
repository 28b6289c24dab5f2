//! Virtual DOM nodes produced by radiant components
//!
//! Components render into a `VNode` tree. The host framework owns diffing and
//! patching; this crate only builds trees, serializes them to HTML and offers
//! a few lookups used when inspecting rendered output.

use indexmap::IndexMap;
use radiant_core::Result;
use serde::{Deserialize, Serialize};

pub mod html;

pub use html::{escape_attr, escape_text, is_valid_attr_name};

pub const TEXT_TAG: &str = "#text";
pub const FRAGMENT_TAG: &str = "#fragment";

/// A virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VNode {
    pub tag: String,
    /// Attributes in insertion order, so serialized output is stable.
    pub attrs: IndexMap<String, String>,
    pub children: Vec<VNode>,
    pub text: Option<String>,
    pub key: Option<String>,
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: None,
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: Some(content.into()),
            key: None,
        }
    }

    /// A tagless container whose children are emitted in place.
    pub fn fragment(children: Vec<VNode>) -> Self {
        Self {
            tag: FRAGMENT_TAG.to_string(),
            attrs: IndexMap::new(),
            children,
            text: None,
            key: None,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn with_opt_attr(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_attr(key, value),
            None => self,
        }
    }

    /// Set a boolean attribute (`checked`, `disabled`) when `on` is true.
    pub fn with_flag(self, key: impl Into<String>, on: bool) -> Self {
        if on {
            self.with_attr(key, "")
        } else {
            self
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<VNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn is_fragment(&self) -> bool {
        self.tag == FRAGMENT_TAG
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// All nodes in this subtree (including `self`) matching `pred`, in
    /// document order.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&VNode) -> bool) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        collect(self, pred, &mut found);
        found
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&VNode> {
        self.find_all(&|node| node.tag == tag)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&VNode> {
        self.find_all(&|node| node.has_class(class))
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        self.children.iter().map(VNode::text_content).collect()
    }

    /// Serialize this subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::write_node(self, &mut out);
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn collect<'a>(node: &'a VNode, pred: &dyn Fn(&VNode) -> bool, found: &mut Vec<&'a VNode>) {
    if pred(node) {
        found.push(node);
    }
    for child in &node.children {
        collect(child, pred, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnode_creation() {
        let node = VNode::element("div")
            .with_attr("class", "container")
            .with_child(VNode::text("Hello"));

        assert_eq!(node.tag, "div");
        assert_eq!(node.attr("class"), Some("container"));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_text_node() {
        let node = VNode::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text, Some("Hello World".to_string()));
    }

    #[test]
    fn test_optional_and_flag_attrs() {
        let node = VNode::element("input")
            .with_opt_attr("name", Some("size"))
            .with_opt_attr("id", None::<String>)
            .with_flag("checked", true)
            .with_flag("disabled", false);

        assert_eq!(node.attr("name"), Some("size"));
        assert!(!node.has_attr("id"));
        assert!(node.has_attr("checked"));
        assert!(!node.has_attr("disabled"));
    }

    #[test]
    fn test_class_queries() {
        let tree = VNode::element("div")
            .with_attr("class", "group  group-outline")
            .with_child(VNode::element("label").with_attr("class", "item item-checked"))
            .with_child(VNode::element("label").with_attr("class", "item"));

        assert!(tree.has_class("group-outline"));
        assert!(!tree.has_class("group-solid"));
        assert_eq!(tree.find_by_class("item").len(), 2);
        assert_eq!(tree.find_by_class("item-checked").len(), 1);
        assert_eq!(tree.find_by_tag("label").len(), 2);
    }

    #[test]
    fn test_text_content() {
        let tree = VNode::element("label")
            .with_child(VNode::element("span").with_child(VNode::text("A")))
            .with_child(VNode::text("B"));
        assert_eq!(tree.text_content(), "AB");
    }

    #[test]
    fn test_to_json() {
        let json = VNode::element("span").with_attr("id", "x").to_json().unwrap();
        assert!(json.contains(r#""tag":"span""#));
        assert!(json.contains(r#""id":"x""#));
    }
}
