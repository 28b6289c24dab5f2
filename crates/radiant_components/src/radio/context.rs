//! The binding a group passes to its radios.

use super::event::RadioChangeEvent;
use radiant_core::SelectionValue;
use std::fmt;

/// Receiver of change events raised by radios inside a group.
pub trait ChangeSink<V> {
    /// Handle a pick; returns whether listeners were notified.
    fn handle_change(&self, event: &RadioChangeEvent<V>) -> bool;
}

/// Read-only view of a group for one render pass or one interaction.
///
/// The selected value is a snapshot taken when the binding was created; the
/// radios never write through it. Picks are forwarded to the group's sink.
pub struct GroupBinding<'g, V> {
    pub value: Option<V>,
    pub disabled: bool,
    pub name: Option<&'g str>,
    sink: &'g dyn ChangeSink<V>,
}

impl<'g, V: SelectionValue> GroupBinding<'g, V> {
    pub fn new(
        value: Option<V>,
        disabled: bool,
        name: Option<&'g str>,
        sink: &'g dyn ChangeSink<V>,
    ) -> Self {
        Self {
            value,
            disabled,
            name,
            sink,
        }
    }

    pub fn is_checked(&self, value: &V) -> bool {
        self.value.as_ref() == Some(value)
    }

    pub fn on_change(&self, event: &RadioChangeEvent<V>) -> bool {
        self.sink.handle_change(event)
    }
}

impl<V: fmt::Debug> fmt::Debug for GroupBinding<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBinding")
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
