//! Ambient render configuration
//!
//! A `ConfigProvider` carries the read-only settings every component consults
//! while rendering: the class-name prefix, the writing direction, the default
//! control size and the theme key used for style hashing.

use crate::errors::{RadiantError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Class-name prefixes end up in generated stylesheets, so they are limited
/// to plain CSS identifiers.
static CSS_IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").unwrap());

/// Whether `name` can be used verbatim as a CSS class selector.
pub fn is_css_identifier(name: &str) -> bool {
    CSS_IDENT_RE.is_match(name)
}

/// Writing direction of the surrounding document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl FromStr for Direction {
    type Err = RadiantError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            other => Err(RadiantError::ConfigError(format!(
                "Unknown direction: {other}"
            ))),
        }
    }
}

/// Control size shared by form components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Small,
    Middle,
    Large,
}

impl ControlSize {
    /// Class-name suffix for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlSize::Small => "small",
            ControlSize::Middle => "middle",
            ControlSize::Large => "large",
        }
    }
}

impl fmt::Display for ControlSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlSize {
    type Err = RadiantError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(ControlSize::Small),
            "md" | "middle" | "medium" => Ok(ControlSize::Middle),
            "lg" | "large" => Ok(ControlSize::Large),
            other => Err(RadiantError::ConfigError(format!("Unknown size: {other}"))),
        }
    }
}

fn default_prefix() -> String {
    "radiant".to_string()
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_hashed() -> bool {
    true
}

/// Render configuration consumed by every component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProvider {
    /// Root class-name prefix (`radiant` by default).
    #[serde(default = "default_prefix")]
    pub prefix_cls: String,
    #[serde(default)]
    pub direction: Direction,
    /// Default size applied when a component does not set its own.
    #[serde(default)]
    pub size: Option<ControlSize>,
    /// Theme key; style hash tokens are derived from it.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Whether components append the style hash token to their classes.
    #[serde(default = "default_hashed")]
    pub hashed: bool,
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self {
            prefix_cls: default_prefix(),
            direction: Direction::default(),
            size: None,
            theme: default_theme(),
            hashed: default_hashed(),
        }
    }
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// Fails with `ConfigError` when `prefixCls` is not a CSS identifier.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if !is_css_identifier(&config.prefix_cls) {
            return Err(RadiantError::ConfigError(format!(
                "Invalid class prefix: {:?}",
                config.prefix_cls
            )));
        }
        Ok(config)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_cls = prefix.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_hashed(mut self, hashed: bool) -> Self {
        self.hashed = hashed;
        self
    }

    /// Resolve the class-name prefix for a component.
    ///
    /// A component-level `custom` prefix always wins. Otherwise the suffix is
    /// appended to the root prefix (`radiant-radio`), or the root prefix is
    /// returned as-is for an empty suffix.
    pub fn get_prefix_cls(&self, suffix: &str, custom: Option<&str>) -> String {
        if let Some(custom) = custom {
            return custom.to_string();
        }
        if suffix.is_empty() {
            self.prefix_cls.clone()
        } else {
            format!("{}-{}", self.prefix_cls, suffix)
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == Direction::Rtl
    }
}
