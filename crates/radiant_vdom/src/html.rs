//! HTML serialization for virtual DOM trees
//!
//! Text and attribute values are always escaped. Boolean attributes are stored
//! with an empty value and emitted bare (`<input checked>`).

use crate::VNode;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Raw-text elements whose content is emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Whether `name` can be written as an attribute name without changing the
/// surrounding markup.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

pub(crate) fn write_node(node: &VNode, out: &mut String) {
    if node.is_text() {
        if let Some(text) = &node.text {
            out.push_str(&escape_text(text));
        }
        return;
    }

    if node.is_fragment() {
        for child in &node.children {
            write_node(child, out);
        }
        return;
    }

    out.push('<');
    out.push_str(&node.tag);
    for (key, value) in node.attrs.iter().filter(|(key, _)| is_valid_attr_name(key)) {
        out.push(' ');
        out.push_str(key);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&node.tag.as_str()) {
        return;
    }

    if RAW_TEXT_ELEMENTS.contains(&node.tag.as_str()) {
        out.push_str(&node.text_content());
    } else {
        for child in &node.children {
            write_node(child, out);
        }
    }

    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use crate::VNode;

    #[test]
    fn test_simple_element() {
        let html = VNode::element("span")
            .with_attr("class", "a b")
            .with_child(VNode::text("hi"))
            .to_html();
        assert_eq!(html, r#"<span class="a b">hi</span>"#);
    }

    #[test]
    fn test_void_element_and_flags() {
        let html = VNode::element("input")
            .with_attr("type", "radio")
            .with_flag("checked", true)
            .to_html();
        assert_eq!(html, r#"<input type="radio" checked>"#);
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let html = VNode::element("div")
            .with_attr("id", "g")
            .with_attr("class", "c")
            .with_attr("data-x", "1")
            .to_html();
        assert_eq!(html, r#"<div id="g" class="c" data-x="1"></div>"#);
    }

    #[test]
    fn test_escaping() {
        let html = VNode::element("label")
            .with_attr("title", "\"quoted\" & <b>")
            .with_child(VNode::text("<script>alert('xss')</script>"))
            .to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("title=\"&quot;quoted&quot; &amp; &lt;b&gt;\""));
    }

    #[test]
    fn test_invalid_attr_names_skipped() {
        let html = VNode::element("div")
            .with_attr(r#"data-x="1" onmouseover="alert(1)"#, "v")
            .with_attr("a b", "v")
            .with_attr("x/", "v")
            .with_attr("id", "ok")
            .to_html();
        assert_eq!(html, r#"<div id="ok"></div>"#);
    }

    #[test]
    fn test_fragment_emits_children_only() {
        let html = VNode::fragment(vec![
            VNode::element("style").with_child(VNode::text(".a > .b{color:red}")),
            VNode::element("div"),
        ])
        .to_html();
        assert_eq!(html, "<style>.a > .b{color:red}</style><div></div>");
    }
}
