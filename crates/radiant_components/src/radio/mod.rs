//! Radio options and radio groups.
//!
//! A `RadioGroup` owns the selected value and hands a `GroupBinding` snapshot
//! to each nested `Radio` when rendering or dispatching interactions. A `Radio`
//! rendered without a binding is a standalone control driven only by its own
//! props.

mod context;
mod event;
mod group;
mod option;
mod plan;
mod state;
mod variant;

pub use context::{ChangeSink, GroupBinding};
pub use event::{ChangeHandler, RadioChangeEvent};
pub use group::RadioGroup;
pub use option::{Radio, ResolvedRadio};
pub use plan::{GroupChild, OptionEntry, RadioOption, RenderPlan};
pub use state::{ControlledBy, GroupState};
pub use variant::{ButtonStyle, OptionType, RadioVariant};
