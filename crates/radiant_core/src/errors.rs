//! Error types shared by the radiant crates

use crate::selection::SelectionMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadiantError {
    /// A group built in one selection mode was driven as if it were in the other.
    #[error("Selection mode cannot change after construction ({from} -> {to})")]
    ModeSwitch {
        from: SelectionMode,
        to: SelectionMode,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RadiantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_switch_message() {
        let err = RadiantError::ModeSwitch {
            from: SelectionMode::Uncontrolled,
            to: SelectionMode::Controlled,
        };
        assert_eq!(
            err.to_string(),
            "Selection mode cannot change after construction (uncontrolled -> controlled)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: RadiantError = parse.unwrap_err().into();
        assert!(matches!(err, RadiantError::Json(_)));
    }
}
