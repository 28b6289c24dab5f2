//! Server-rendered UI components for radiant.
//!
//! Components render into `radiant_vdom::VNode` trees. Every render receives a
//! `RenderContext` carrying the ambient configuration and the style registry,
//! so components never look anything up implicitly.

use radiant_core::ConfigProvider;
use radiant_vdom::VNode;

pub mod attrs;
pub mod classes;
pub mod radio;
pub mod style;

#[cfg(feature = "python")]
pub mod python;

pub use attrs::InlineStyle;
pub use classes::ClassNames;
pub use radio::{
    ButtonStyle, ChangeHandler, GroupBinding, GroupChild, OptionEntry, OptionType, Radio,
    RadioChangeEvent, RadioGroup, RadioOption, RadioVariant,
};
pub use style::{StyleMode, StyleRegistry};

/// Everything a component needs from its surroundings while rendering.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub config: ConfigProvider,
    pub styles: StyleRegistry,
}

impl RenderContext {
    pub fn new(config: ConfigProvider) -> Self {
        Self {
            config,
            styles: StyleRegistry::default(),
        }
    }

    pub fn with_style_mode(mut self, mode: StyleMode) -> Self {
        self.styles = StyleRegistry::new(mode);
        self
    }
}

/// A renderable component.
pub trait Component {
    fn render(&self, cx: &RenderContext) -> VNode;

    /// Render straight to an HTML string.
    fn render_html(&self, cx: &RenderContext) -> String {
        self.render(cx).to_html()
    }
}
