//! Core utilities and types for radiant
//!
//! This crate provides the foundational pieces shared across the radiant
//! component crates: the error type, the ambient render configuration and the
//! selection value types used by selectable components.

pub mod config;
pub mod errors;
pub mod selection;

pub use config::{is_css_identifier, ConfigProvider, ControlSize, Direction};
pub use errors::{RadiantError, Result};
pub use selection::{OptionValue, SelectionMode, SelectionValue};
