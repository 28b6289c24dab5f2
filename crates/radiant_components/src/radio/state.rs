//! Selection state of a radio group.
//!
//! The owner of the value is fixed when the state is built. A caller-owned
//! (`External`) value only changes through `sync_external`; an owned
//! (`Internal`) value only changes through `select`.

use radiant_core::{RadiantError, Result, SelectionMode, SelectionValue};

/// Who owns the selected value, and the value itself (`None` = nothing selected).
#[derive(Debug, Clone, PartialEq)]
pub enum ControlledBy<V> {
    External(Option<V>),
    Internal(Option<V>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupState<V> {
    source: ControlledBy<V>,
}

impl<V: SelectionValue> GroupState<V> {
    pub fn controlled(value: Option<V>) -> Self {
        Self {
            source: ControlledBy::External(value),
        }
    }

    pub fn uncontrolled(default_value: Option<V>) -> Self {
        Self {
            source: ControlledBy::Internal(default_value),
        }
    }

    pub fn source(&self) -> &ControlledBy<V> {
        &self.source
    }

    pub fn mode(&self) -> SelectionMode {
        match self.source {
            ControlledBy::External(_) => SelectionMode::Controlled,
            ControlledBy::Internal(_) => SelectionMode::Uncontrolled,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.mode() == SelectionMode::Controlled
    }

    pub fn value(&self) -> Option<&V> {
        match &self.source {
            ControlledBy::External(value) | ControlledBy::Internal(value) => value.as_ref(),
        }
    }

    /// Apply a pick of `candidate`.
    ///
    /// Owned values take the candidate; caller-owned values are left alone.
    /// Returns whether the candidate differs from the value held before the
    /// call, i.e. whether listeners should be told.
    pub fn select(&mut self, candidate: V) -> bool {
        match &mut self.source {
            ControlledBy::External(current) => current.as_ref() != Some(&candidate),
            ControlledBy::Internal(current) => {
                let changed = current.as_ref() != Some(&candidate);
                *current = Some(candidate);
                changed
            }
        }
    }

    /// Reflect a new caller-supplied value.
    ///
    /// Only valid for caller-owned state; an owned state cannot be taken over.
    pub fn sync_external(&mut self, value: Option<V>) -> Result<()> {
        match &mut self.source {
            ControlledBy::External(current) => {
                *current = value;
                Ok(())
            }
            ControlledBy::Internal(_) => Err(RadiantError::ModeSwitch {
                from: SelectionMode::Uncontrolled,
                to: SelectionMode::Controlled,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_initial_state() {
        let state = GroupState::<&str>::uncontrolled(None);
        assert_eq!(state.value(), None);
        assert_eq!(state.mode(), SelectionMode::Uncontrolled);

        let state = GroupState::uncontrolled(Some("a"));
        assert_eq!(state.value(), Some(&"a"));
    }

    #[test]
    fn test_uncontrolled_select() {
        let mut state = GroupState::uncontrolled(Some("a"));
        assert!(state.select("b"));
        assert_eq!(state.value(), Some(&"b"));
        assert!(!state.select("b"));
        assert_eq!(state.value(), Some(&"b"));
    }

    #[test]
    fn test_select_from_unselected() {
        let mut state = GroupState::<i32>::uncontrolled(None);
        assert!(state.select(3));
        assert_eq!(state.value(), Some(&3));
    }

    #[test]
    fn test_controlled_select_does_not_mutate() {
        let mut state = GroupState::controlled(Some(1));
        assert!(state.select(2));
        assert_eq!(state.value(), Some(&1));
        assert!(!state.select(1));
        assert!(state.is_controlled());
    }

    #[test]
    fn test_controlled_sync() {
        let mut state = GroupState::controlled(None);
        state.sync_external(Some("x")).unwrap();
        assert_eq!(state.value(), Some(&"x"));
        state.sync_external(None).unwrap();
        assert_eq!(state.value(), None);
    }

    #[test]
    fn test_uncontrolled_rejects_external_value() {
        let mut state = GroupState::uncontrolled(Some("a"));
        let err = state.sync_external(Some("b")).unwrap_err();
        assert!(matches!(
            err,
            RadiantError::ModeSwitch {
                from: SelectionMode::Uncontrolled,
                to: SelectionMode::Controlled,
            }
        ));
        assert_eq!(state.value(), Some(&"a"));
    }
}
