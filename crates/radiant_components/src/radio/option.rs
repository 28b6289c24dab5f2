//! A single radio control.

use super::context::GroupBinding;
use super::event::{ChangeHandler, RadioChangeEvent};
use super::variant::RadioVariant;
use crate::attrs::InlineStyle;
use crate::classes::ClassNames;
use crate::{Component, RenderContext};
use radiant_core::SelectionValue;
use radiant_vdom::VNode;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A radio option, standalone or nested in a group.
///
/// The struct holds props only. Inside a group, `checked` and `disabled` are
/// recomputed from the binding at render and interaction time.
#[derive(Clone)]
pub struct Radio<V> {
    pub value: V,
    pub label: Option<String>,
    /// Used only when rendered without a group.
    pub checked: bool,
    pub disabled: bool,
    pub variant: RadioVariant,
    /// Input `name` when rendered without a group.
    pub name: Option<String>,
    /// Replaces the configured `{prefix}-radio` / `{prefix}-radio-button` prefix.
    pub prefix_cls: Option<String>,
    pub class_name: Option<String>,
    pub style: InlineStyle,
    pub id: Option<String>,
    pub key: Option<String>,
    pub on_change: Option<ChangeHandler<V>>,
}

/// Effective state of a radio after applying the group binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRadio {
    pub checked: bool,
    pub disabled: bool,
    pub name: Option<String>,
}

impl<V: SelectionValue> Radio<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            label: None,
            checked: false,
            disabled: false,
            variant: RadioVariant::Default,
            name: None,
            prefix_cls: None,
            class_name: None,
            style: InlineStyle::default(),
            id: None,
            key: None,
            on_change: None,
        }
    }

    /// A radio drawn as a segmented button.
    pub fn button(value: V) -> Self {
        Self::new(value).with_variant(RadioVariant::Button)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_variant(mut self, variant: RadioVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&RadioChangeEvent<V>) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Effective checked/disabled/name for this radio.
    ///
    /// A group binding takes precedence over the radio's own `checked` and
    /// `name`, and its `disabled` flag is OR'd with the radio's.
    pub fn resolve(&self, binding: Option<&GroupBinding<'_, V>>) -> ResolvedRadio {
        match binding {
            Some(binding) => ResolvedRadio {
                checked: binding.is_checked(&self.value),
                disabled: self.disabled || binding.disabled,
                name: binding.name.map(str::to_string),
            },
            None => ResolvedRadio {
                checked: self.checked,
                disabled: self.disabled,
                name: self.name.clone(),
            },
        }
    }

    /// Simulate the user picking this radio.
    ///
    /// Disabled radios raise nothing. Otherwise the radio's own handler runs
    /// first, then the event goes to the group when a binding is given.
    /// Returns the raised event.
    pub fn trigger(&self, binding: Option<&GroupBinding<'_, V>>) -> Option<RadioChangeEvent<V>> {
        let resolved = self.resolve(binding);
        if resolved.disabled {
            debug!(value = %self.value, "ignoring pick of disabled radio");
            return None;
        }

        let event = RadioChangeEvent::new(self.value.clone()).with_name(resolved.name);
        if let Some(handler) = &self.on_change {
            handler(&event);
        }
        if let Some(binding) = binding {
            binding.on_change(&event);
        }
        Some(event)
    }

    /// Render against an optional group binding.
    pub fn render_in(&self, cx: &RenderContext, binding: Option<&GroupBinding<'_, V>>) -> VNode {
        let prefix = cx
            .config
            .get_prefix_cls(self.variant.component(), self.prefix_cls.as_deref());
        let style = cx.styles.use_style(&cx.config, &prefix);
        let ResolvedRadio {
            checked,
            disabled,
            name,
        } = self.resolve(binding);

        let wrapper_class = ClassNames::new()
            .add(format!("{prefix}-wrapper"))
            .add_if(format!("{prefix}-wrapper-checked"), checked)
            .add_if(format!("{prefix}-wrapper-disabled"), disabled)
            .add_if(format!("{prefix}-wrapper-rtl"), cx.config.is_rtl())
            .add_opt(self.class_name.as_deref())
            .add(style.hash_id());

        let control_class = ClassNames::new()
            .add(&prefix)
            .add_if(format!("{prefix}-checked"), checked)
            .add_if(format!("{prefix}-disabled"), disabled);

        let input = VNode::element("input")
            .with_attr("type", "radio")
            .with_attr("class", format!("{prefix}-input"))
            .with_opt_attr("id", self.id.as_deref())
            .with_opt_attr("name", name)
            .with_attr("value", self.value.to_string())
            .with_flag("checked", checked)
            .with_flag("disabled", disabled);

        let control = VNode::element("span")
            .with_attr("class", control_class.build())
            .with_child(input)
            .with_child(VNode::element("span").with_attr("class", format!("{prefix}-inner")));

        let mut wrapper = VNode::element("label")
            .with_attr("class", wrapper_class.build())
            .with_opt_attr("style", self.style.to_attr())
            .with_child(control);
        if let Some(label) = &self.label {
            wrapper = wrapper.with_child(VNode::element("span").with_child(VNode::text(label)));
        }
        if let Some(key) = &self.key {
            wrapper = wrapper.with_key(key);
        }

        style.wrap_ssr(wrapper)
    }
}

impl<V: SelectionValue> Component for Radio<V> {
    fn render(&self, cx: &RenderContext) -> VNode {
        self.render_in(cx, None)
    }
}

impl<V: fmt::Debug> fmt::Debug for Radio<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Radio")
            .field("value", &self.value)
            .field("label", &self.label)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("variant", &self.variant)
            .field("name", &self.name)
            .field("class_name", &self.class_name)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleMode;
    use radiant_core::{ConfigProvider, Direction};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cx() -> RenderContext {
        RenderContext::new(ConfigProvider::default()).with_style_mode(StyleMode::Collect)
    }

    #[test]
    fn test_standalone_render() {
        let node = Radio::new("apple").with_label("Apple").render(&cx());

        assert_eq!(node.tag, "label");
        assert!(node.has_class("radiant-radio-wrapper"));
        assert!(!node.has_class("radiant-radio-wrapper-checked"));
        let input = node.find_by_tag("input")[0];
        assert_eq!(input.attr("type"), Some("radio"));
        assert_eq!(input.attr("value"), Some("apple"));
        assert!(!input.has_attr("checked"));
        assert_eq!(node.text_content(), "Apple");
    }

    #[test]
    fn test_standalone_honors_own_props() {
        let node = Radio::new(1)
            .with_checked(true)
            .with_disabled(true)
            .with_name("n")
            .render(&cx());

        assert!(node.has_class("radiant-radio-wrapper-checked"));
        assert!(node.has_class("radiant-radio-wrapper-disabled"));
        assert_eq!(node.find_by_class("radiant-radio-checked").len(), 1);
        let input = node.find_by_tag("input")[0];
        assert!(input.has_attr("checked"));
        assert!(input.has_attr("disabled"));
        assert_eq!(input.attr("name"), Some("n"));
    }

    #[test]
    fn test_button_variant_prefix() {
        let node = Radio::button("a").with_class_name("mine").render(&cx());
        assert!(node.has_class("radiant-radio-button-wrapper"));
        assert!(node.has_class("mine"));
        assert_eq!(node.find_by_class("radiant-radio-button-input").len(), 1);
    }

    #[test]
    fn test_custom_prefix_and_rtl() {
        let cx = RenderContext::new(ConfigProvider::default().with_direction(Direction::Rtl))
            .with_style_mode(StyleMode::Collect);
        let node = Radio::new("a").with_prefix_cls("pick").render(&cx);
        assert!(node.has_class("pick-wrapper"));
        assert!(node.has_class("pick-wrapper-rtl"));
    }

    #[test]
    fn test_hash_token_appended() {
        let cx = cx();
        let node = Radio::new("a").render(&cx);
        let token = crate::style::hash_token(&cx.config.theme);
        assert!(node.has_class(&token));
    }

    #[test]
    fn test_standalone_trigger_calls_own_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let radio = Radio::new("a").with_name("fruit").on_change(move |event| {
            assert_eq!(event.value, "a");
            assert_eq!(event.name.as_deref(), Some("fruit"));
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let event = radio.trigger(None).unwrap();
        assert!(event.checked);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_trigger_raises_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let radio = Radio::new("a").with_disabled(true).on_change(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(radio.trigger(None).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_inline_style_rendered() {
        let node = Radio::new("a")
            .with_style(InlineStyle::new().with("width", "50%"))
            .render(&cx());
        assert_eq!(node.attr("style"), Some("width: 50%;"));
    }
}
