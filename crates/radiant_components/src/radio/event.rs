use std::sync::Arc;

/// Raised by a radio when the user picks it.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioChangeEvent<V> {
    /// Value of the radio that raised the event.
    pub value: V,
    /// Checked state the radio asks for; always true for a pick.
    pub checked: bool,
    /// Input `name` the radio was rendered with.
    pub name: Option<String>,
}

impl<V> RadioChangeEvent<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            checked: true,
            name: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

/// Callback receiving change events.
pub type ChangeHandler<V> = Arc<dyn Fn(&RadioChangeEvent<V>) + Send + Sync>;
