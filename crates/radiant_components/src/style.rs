//! Scoped style injection
//!
//! Components ask the registry for their stylesheet once per render. The
//! registry derives a hash token from the theme key, records the sheet for
//! `(token, prefix)` and hands back a `StyleHandle` with the token to append to
//! class names and a `wrap_ssr` step for server-rendered output.

use ahash::RandomState;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use radiant_core::{is_css_identifier, ConfigProvider};
use radiant_vdom::VNode;
use tracing::{trace, warn};

/// Fixed seeds so a theme key maps to the same token in every process.
static TOKEN_HASHER: Lazy<RandomState> = Lazy::new(|| {
    RandomState::with_seeds(
        0x5261_6469_616e_7431,
        0x7374_796c_6531_3233,
        0x7468_656d_655f_6b65,
        0x795f_6861_7368_6572,
    )
});

/// Where registered sheets end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// The first render that uses a sheet gets a `<style>` element in front of it.
    #[default]
    Inline,
    /// Sheets are only recorded; the host emits `StyleRegistry::stylesheet()`.
    Collect,
}

/// Scoped class token for a theme key, e.g. `css-1a2b3c`.
pub fn hash_token(theme: &str) -> String {
    format!("css-{:06x}", TOKEN_HASHER.hash_one(theme) & 0x00ff_ffff)
}

#[derive(Debug, Default)]
pub struct StyleRegistry {
    mode: StyleMode,
    sheets: Mutex<IndexMap<String, String>>,
}

impl StyleRegistry {
    pub fn new(mode: StyleMode) -> Self {
        Self {
            mode,
            sheets: Mutex::new(IndexMap::new()),
        }
    }

    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    /// Register the stylesheet for `prefix_cls` under the configured theme token.
    ///
    /// A prefix that is not a CSS identifier gets no stylesheet; the handle
    /// still carries the hash token.
    pub fn use_style(&self, config: &ConfigProvider, prefix_cls: &str) -> StyleHandle {
        let hash_id = if config.hashed {
            hash_token(&config.theme)
        } else {
            String::new()
        };
        let key = format!("{hash_id}|{prefix_cls}");

        if !is_css_identifier(prefix_cls) {
            warn!(prefix = %prefix_cls, "skipping stylesheet for invalid class prefix");
            return StyleHandle {
                hash_id,
                key,
                inline_css: None,
            };
        }

        let mut sheets = self.sheets.lock();
        let fresh = !sheets.contains_key(&key);
        if fresh {
            let css = radio_css(prefix_cls, &hash_id);
            trace!(key = %key, bytes = css.len(), "registering stylesheet");
            sheets.insert(key.clone(), css);
        }
        let inline_css = match (self.mode, fresh) {
            (StyleMode::Inline, true) => sheets.get(&key).cloned(),
            _ => None,
        };

        StyleHandle {
            hash_id,
            key,
            inline_css,
        }
    }

    /// Every registered sheet, in registration order.
    pub fn stylesheet(&self) -> String {
        self.sheets.lock().values().cloned().collect::<Vec<_>>().join("\n")
    }

    pub fn len(&self) -> usize {
        self.sheets.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.lock().is_empty()
    }

    /// Forget all sheets, e.g. between server requests.
    pub fn reset(&self) {
        self.sheets.lock().clear();
    }
}

/// Result of `StyleRegistry::use_style` for one render.
#[derive(Debug, Clone)]
pub struct StyleHandle {
    hash_id: String,
    key: String,
    inline_css: Option<String>,
}

impl StyleHandle {
    /// Token to append to class names; empty when hashing is disabled.
    pub fn hash_id(&self) -> &str {
        &self.hash_id
    }

    /// Put the sheet's `<style>` element in front of `node` when this render
    /// is the first to use it in inline mode.
    pub fn wrap_ssr(self, node: VNode) -> VNode {
        match self.inline_css {
            Some(css) => VNode::fragment(vec![
                VNode::element("style")
                    .with_attr("data-rd-style", self.key)
                    .with_child(VNode::text(css)),
                node,
            ]),
            None => node,
        }
    }
}

fn radio_css(prefix: &str, hash_id: &str) -> String {
    let scope = if hash_id.is_empty() {
        String::new()
    } else {
        format!(":where(.{hash_id})")
    };
    let rules = [
        (format!("{prefix}-group"), "display:inline-block;font-size:0"),
        (format!("{prefix}-group-rtl"), "direction:rtl"),
        (
            format!("{prefix}-wrapper"),
            "display:inline-flex;align-items:baseline;margin-inline-end:8px;cursor:pointer",
        ),
        (format!("{prefix}-wrapper-disabled"), "cursor:not-allowed;opacity:0.5"),
        (format!("{prefix}"), "position:relative;display:inline-block"),
        (
            format!("{prefix}-input"),
            "position:absolute;inset:0;z-index:1;margin:0;cursor:pointer;opacity:0",
        ),
        (
            format!("{prefix}-inner"),
            "display:block;width:16px;height:16px;border:1px solid #d9d9d9;border-radius:50%",
        ),
        (
            format!("{prefix}-checked .{prefix}-inner"),
            "border-color:#1677ff;background-color:#1677ff",
        ),
    ];
    rules
        .iter()
        .map(|(selector, body)| format!("{scope}.{selector}{{{body}}}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_stable() {
        assert_eq!(hash_token("default"), hash_token("default"));
        assert_ne!(hash_token("default"), hash_token("dark"));
        let token = hash_token("default");
        assert!(token.starts_with("css-"));
        assert_eq!(token.len(), "css-".len() + 6);
    }

    #[test]
    fn test_inline_mode_emits_style_once() {
        let registry = StyleRegistry::new(StyleMode::Inline);
        let config = ConfigProvider::default();

        let first = registry
            .use_style(&config, "radiant-radio")
            .wrap_ssr(VNode::element("div"));
        assert!(first.is_fragment());
        assert_eq!(first.children[0].tag, "style");

        let second = registry
            .use_style(&config, "radiant-radio")
            .wrap_ssr(VNode::element("div"));
        assert_eq!(second.tag, "div");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_collect_mode_records_only() {
        let registry = StyleRegistry::new(StyleMode::Collect);
        let config = ConfigProvider::default();

        let node = registry
            .use_style(&config, "radiant-radio-button")
            .wrap_ssr(VNode::element("label"));
        assert_eq!(node.tag, "label");
        assert!(registry.stylesheet().contains(".radiant-radio-button-wrapper{"));

        registry.reset();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unhashed_config() {
        let registry = StyleRegistry::new(StyleMode::Collect);
        let config = ConfigProvider::default().with_hashed(false);

        let handle = registry.use_style(&config, "radiant-radio");
        assert_eq!(handle.hash_id(), "");
        assert!(!registry.stylesheet().contains(":where("));
    }

    #[test]
    fn test_scoped_selectors() {
        let registry = StyleRegistry::new(StyleMode::Collect);
        let config = ConfigProvider::default();

        let handle = registry.use_style(&config, "radiant-radio");
        let expected = format!(":where(.{}).radiant-radio-group{{", handle.hash_id());
        assert!(registry.stylesheet().contains(&expected));
    }

    #[test]
    fn test_invalid_prefix_gets_no_sheet() {
        let registry = StyleRegistry::new(StyleMode::Inline);
        let config = ConfigProvider::default();

        let node = registry
            .use_style(&config, "x{}</style><script>alert(1)</script>")
            .wrap_ssr(VNode::element("div"));
        assert_eq!(node.tag, "div");
        assert!(registry.is_empty());
    }
}
