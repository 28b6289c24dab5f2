//! Property-based tests for HTML serialization using proptest.
//!
//! Arbitrary user text placed in text nodes or attribute values must never
//! produce markup of its own.

use proptest::prelude::*;
use radiant_vdom::{is_valid_attr_name, VNode};

proptest! {
    #[test]
    fn text_never_opens_tags(text in ".{0,64}") {
        let html = VNode::element("span").with_child(VNode::text(text)).to_html();
        prop_assert_eq!(html.matches('<').count(), 2);
        prop_assert_eq!(html.matches('>').count(), 2);
    }

    #[test]
    fn attr_values_stay_quoted(value in ".{1,64}") {
        let html = VNode::element("div").with_attr("title", value).to_html();
        prop_assert_eq!(html.matches('"').count(), 2);
        prop_assert!(html.starts_with("<div title=\""));
        prop_assert!(html.ends_with("\"></div>"));
    }

    #[test]
    fn attr_names_cannot_add_attributes(name in r#"[a-z"'=/<> \t-]{1,24}"#) {
        let html = VNode::element("div").with_attr(name.clone(), "v").to_html();
        prop_assert!(html.matches('"').count() <= 2);
        prop_assert!(html.ends_with("></div>"));
        if is_valid_attr_name(&name) {
            prop_assert_eq!(html, format!("<div {name}=\"v\"></div>"));
        } else {
            prop_assert_eq!(html, "<div></div>");
        }
    }

    #[test]
    fn fragments_are_transparent(texts in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let children: Vec<VNode> = texts
            .iter()
            .map(|t| VNode::element("b").with_child(VNode::text(t.clone())))
            .collect();
        let wrapped = VNode::element("p")
            .with_child(VNode::fragment(children.clone()))
            .to_html();
        let flat = VNode::element("p").with_children(children).to_html();
        prop_assert_eq!(wrapped, flat);
    }
}
