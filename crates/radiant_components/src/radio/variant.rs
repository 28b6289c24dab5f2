use radiant_core::RadiantError;
use serde::Deserialize;
use std::str::FromStr;

/// How a single radio is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioVariant {
    /// Circle plus label.
    #[default]
    Default,
    /// Segmented button.
    Button,
}

impl RadioVariant {
    /// Component suffix used to build the class-name prefix.
    pub fn component(&self) -> &'static str {
        match self {
            RadioVariant::Default => "radio",
            RadioVariant::Button => "radio-button",
        }
    }
}

/// Variant used for entries a group builds from its `options` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    Default,
    Button,
}

impl From<OptionType> for RadioVariant {
    fn from(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Default => RadioVariant::Default,
            OptionType::Button => RadioVariant::Button,
        }
    }
}

impl FromStr for OptionType {
    type Err = RadiantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(OptionType::Default),
            "button" => Ok(OptionType::Button),
            other => Err(RadiantError::ConfigError(format!(
                "Unknown option type: {other}"
            ))),
        }
    }
}

/// Fill style of button-variant groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Outline,
    Solid,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonStyle::Outline => "outline",
            ButtonStyle::Solid => "solid",
        }
    }
}

impl FromStr for ButtonStyle {
    type Err = RadiantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outline" => Ok(ButtonStyle::Outline),
            "solid" => Ok(ButtonStyle::Solid),
            other => Err(RadiantError::ConfigError(format!(
                "Unknown button style: {other}"
            ))),
        }
    }
}
