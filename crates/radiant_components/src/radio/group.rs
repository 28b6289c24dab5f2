//! Radio group: owns the selection shared by its radios.

use super::context::{ChangeSink, GroupBinding};
use super::event::{ChangeHandler, RadioChangeEvent};
use super::option::Radio;
use super::plan::{GroupChild, OptionEntry, RenderPlan};
use super::state::GroupState;
use super::variant::{ButtonStyle, OptionType, RadioVariant};
use crate::attrs::{data_or_aria_attrs, InlineStyle};
use crate::classes::ClassNames;
use crate::{Component, RenderContext};
use indexmap::IndexMap;
use parking_lot::Mutex;
use radiant_core::{ControlSize, Result, SelectionMode, SelectionValue};
use radiant_vdom::VNode;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A set of mutually exclusive radios.
///
/// The selection mode is chosen by the constructor and never changes:
/// `controlled` groups reflect the value last passed to `set_value`, while
/// `uncontrolled` groups store each pick themselves. In both modes
/// `on_change` fires only when a pick differs from the value held before it.
pub struct RadioGroup<V> {
    state: Mutex<GroupState<V>>,
    /// When non-empty, rendered instead of `children`.
    pub options: Vec<OptionEntry<V>>,
    pub children: Vec<GroupChild<V>>,
    pub disabled: bool,
    pub name: Option<String>,
    /// Overrides the configured default size.
    pub size: Option<ControlSize>,
    pub button_style: ButtonStyle,
    pub option_type: OptionType,
    pub prefix_cls: Option<String>,
    pub class_name: Option<String>,
    pub style: InlineStyle,
    pub id: Option<String>,
    /// Free-form attributes; only `data-*`, `aria-*` and `role` are rendered.
    pub attrs: IndexMap<String, String>,
    /// Handler names bound to the container's mouse events.
    pub on_mouse_enter: Option<String>,
    pub on_mouse_leave: Option<String>,
    on_change: Option<ChangeHandler<V>>,
}

impl<V: SelectionValue> RadioGroup<V> {
    fn with_state(state: GroupState<V>) -> Self {
        Self {
            state: Mutex::new(state),
            options: Vec::new(),
            children: Vec::new(),
            disabled: false,
            name: None,
            size: None,
            button_style: ButtonStyle::default(),
            option_type: OptionType::default(),
            prefix_cls: None,
            class_name: None,
            style: InlineStyle::default(),
            id: None,
            attrs: IndexMap::new(),
            on_mouse_enter: None,
            on_mouse_leave: None,
            on_change: None,
        }
    }

    /// A group whose value is owned by the caller.
    pub fn controlled(value: Option<V>) -> Self {
        Self::with_state(GroupState::controlled(value))
    }

    /// A group that owns its value, starting from `default_value`.
    pub fn uncontrolled(default_value: Option<V>) -> Self {
        Self::with_state(GroupState::uncontrolled(default_value))
    }

    pub fn new() -> Self {
        Self::uncontrolled(None)
    }

    pub fn with_options<I, E>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<OptionEntry<V>>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_child(mut self, child: impl Into<GroupChild<V>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_button_style(mut self, button_style: ButtonStyle) -> Self {
        self.button_style = button_style;
        self
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
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

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_mouse_enter(mut self, handler: impl Into<String>) -> Self {
        self.on_mouse_enter = Some(handler.into());
        self
    }

    pub fn with_mouse_leave(mut self, handler: impl Into<String>) -> Self {
        self.on_mouse_leave = Some(handler.into());
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(&RadioChangeEvent<V>) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.state.lock().mode()
    }

    pub fn is_controlled(&self) -> bool {
        self.state.lock().is_controlled()
    }

    /// Currently selected value, `None` when nothing is selected.
    pub fn value(&self) -> Option<V> {
        self.state.lock().value().cloned()
    }

    pub fn is_checked(&self, value: &V) -> bool {
        self.state.lock().value() == Some(value)
    }

    /// Reflect a new caller-supplied value (controlled groups only).
    ///
    /// Fails with `ModeSwitch` for uncontrolled groups: a group cannot be
    /// taken over by the caller after construction.
    pub fn set_value(&self, value: Option<V>) -> Result<()> {
        self.state.lock().sync_external(value).inspect_err(|err| {
            warn!(error = %err, "rejected external value for radio group");
        })
    }

    /// Route a change event raised by one of the radios.
    ///
    /// Returns whether `on_change` was invoked.
    pub fn handle_change(&self, event: &RadioChangeEvent<V>) -> bool {
        let notify = {
            let mut state = self.state.lock();
            let previous = state.value().cloned();
            let notify = state.select(event.value.clone());
            debug!(
                mode = %state.mode(),
                previous = ?previous.as_ref().map(ToString::to_string),
                candidate = %event.value,
                notify,
                "radio group change"
            );
            notify
        };

        if notify {
            if let Some(handler) = &self.on_change {
                handler(event);
            }
        }
        notify
    }

    /// Pick `value` as if its radio had been clicked.
    pub fn select(&self, value: V) -> bool {
        let event = RadioChangeEvent::new(value).with_name(self.name.clone());
        self.handle_change(&event)
    }

    /// Snapshot of the group for its radios.
    pub fn binding(&self) -> GroupBinding<'_, V> {
        GroupBinding::new(self.value(), self.disabled, self.name.as_deref(), self)
    }

    /// Decide what this render pass shows.
    ///
    /// A non-empty `options` list wins over `children`. Entries become radios
    /// of the group's option type; the group's `disabled` flag is OR'd into
    /// each and `checked` reflects `current`.
    pub fn resolve_plan(&self, current: Option<&V>) -> RenderPlan<'_, V> {
        if self.options.is_empty() {
            trace!(children = self.children.len(), "radio group renders children");
            return RenderPlan::Children(&self.children);
        }

        let variant = RadioVariant::from(self.option_type);
        let prefix_cls = self.prefix_cls.as_ref().map(|prefix| match variant {
            RadioVariant::Button => format!("{prefix}-button"),
            RadioVariant::Default => prefix.clone(),
        });

        let radios = self
            .options
            .iter()
            .map(|entry| {
                let (radio, key) = match entry {
                    OptionEntry::Shorthand(value) => (
                        Radio::new(value.clone()).with_label(value.to_string()),
                        value.to_string(),
                    ),
                    OptionEntry::Detailed(option) => (
                        Radio::new(option.value.clone())
                            .with_label(option.label.clone())
                            .with_style(option.style.clone())
                            .with_disabled(option.disabled),
                        format!("radio-group-value-options-{}", option.value),
                    ),
                };
                let disabled = radio.disabled || self.disabled;
                let checked = current == Some(&radio.value);
                let mut radio = radio
                    .with_key(key)
                    .with_variant(variant)
                    .with_disabled(disabled)
                    .with_checked(checked);
                radio.prefix_cls = prefix_cls.clone();
                radio
            })
            .collect::<Vec<_>>();

        trace!(options = radios.len(), "radio group renders options");
        RenderPlan::Options(radios)
    }
}

impl<V: SelectionValue> Default for RadioGroup<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: SelectionValue> ChangeSink<V> for RadioGroup<V> {
    fn handle_change(&self, event: &RadioChangeEvent<V>) -> bool {
        RadioGroup::handle_change(self, event)
    }
}

impl<V: SelectionValue> Component for RadioGroup<V> {
    fn render(&self, cx: &RenderContext) -> VNode {
        let prefix = cx.config.get_prefix_cls("radio", self.prefix_cls.as_deref());
        let group_prefix = format!("{prefix}-group");
        let style = cx.styles.use_style(&cx.config, &prefix);

        let binding = self.binding();
        let children: Vec<VNode> = match self.resolve_plan(binding.value.as_ref()) {
            RenderPlan::Options(radios) => radios
                .iter()
                .map(|radio| radio.render_in(cx, Some(&binding)))
                .collect(),
            RenderPlan::Children(children) => children
                .iter()
                .map(|child| match child {
                    GroupChild::Radio(radio) => radio.render_in(cx, Some(&binding)),
                    GroupChild::Node(node) => node.clone(),
                })
                .collect(),
        };

        let size = self.size.or(cx.config.size);
        let class = ClassNames::new()
            .add(&group_prefix)
            .add(format!("{group_prefix}-{}", self.button_style.as_str()))
            .add_opt(size.map(|size| format!("{group_prefix}-{size}")))
            .add_if(format!("{group_prefix}-rtl"), cx.config.is_rtl())
            .add_opt(self.class_name.as_deref())
            .add(style.hash_id());

        let mut container = VNode::element("div");
        for (name, value) in data_or_aria_attrs(&self.attrs) {
            container = container.with_attr(name, value);
        }
        let container = container
            .with_attr("class", class.build())
            .with_opt_attr("style", self.style.to_attr())
            .with_opt_attr("rd-mouseenter", self.on_mouse_enter.as_deref())
            .with_opt_attr("rd-mouseleave", self.on_mouse_leave.as_deref())
            .with_opt_attr("id", self.id.as_deref())
            .with_children(children);

        style.wrap_ssr(container)
    }
}

impl<V: SelectionValue + fmt::Debug> fmt::Debug for RadioGroup<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroup")
            .field("state", &*self.state.lock())
            .field("options", &self.options)
            .field("children", &self.children.len())
            .field("disabled", &self.disabled)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
