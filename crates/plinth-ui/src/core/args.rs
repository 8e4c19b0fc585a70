//! Decoding of untyped prop bags into typed component configs.
//!
//! # Design
//! - Prop bags arrive as JSON or as string attribute pairs; both paths reject unknown keys,
//!   missing required props, and out-of-domain values before any style is resolved.
//! - Callbacks and content are not data; they are attached when building the config.

use crate::core::button::{ButtonConfig, ButtonSize, ButtonVariant, TextColor};
use crate::core::error::{Result, StyleError};
use crate::core::stack::{Orientation, StackConfig};
use serde::Deserialize;

/// Data-only button props.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonArgs {
    /// Required visual variant.
    pub variant: ButtonVariant,
    /// Required size token.
    pub size: ButtonSize,
    /// Optional text color override.
    #[serde(default)]
    pub color: Option<TextColor>,
    /// Disabled flag, `false` when omitted.
    #[serde(default)]
    pub disabled: bool,
}

impl ButtonArgs {
    /// Decode button props from a JSON object.
    ///
    /// # Errors
    /// Returns [`StyleError::Decode`] for malformed JSON, unknown keys, missing required props,
    /// or enum values outside their domain.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode button props from string attribute pairs. Later duplicates win.
    ///
    /// # Errors
    /// Returns [`StyleError::UnknownField`] for unrecognised keys,
    /// [`StyleError::InvalidValue`] for out-of-domain values, and
    /// [`StyleError::MissingField`] when `variant` or `size` is absent.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut variant = None;
        let mut size = None;
        let mut color = None;
        let mut disabled = false;
        for (key, value) in pairs {
            match key {
                "variant" => variant = Some(value.parse::<ButtonVariant>()?),
                "size" => size = Some(value.parse::<ButtonSize>()?),
                "color" => color = Some(value.parse::<TextColor>()?),
                "disabled" => disabled = parse_flag("disabled", value)?,
                other => {
                    return Err(StyleError::UnknownField {
                        field: other.to_string(),
                    });
                }
            }
        }
        Ok(Self {
            variant: variant.ok_or(StyleError::MissingField { field: "variant" })?,
            size: size.ok_or(StyleError::MissingField { field: "size" })?,
            color,
            disabled,
        })
    }

    /// Build the typed configuration around `content`.
    #[must_use]
    pub fn into_config<C>(self, content: C) -> ButtonConfig<C> {
        let config = ButtonConfig::new(self.variant, self.size, content).disabled(self.disabled);
        match self.color {
            Some(color) => config.with_color(color),
            None => config,
        }
    }
}

/// Data-only stack props.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackArgs {
    /// Layout axis, horizontal when omitted.
    #[serde(default)]
    pub orientation: Orientation,
}

impl StackArgs {
    /// Decode stack props from a JSON object.
    ///
    /// # Errors
    /// Returns [`StyleError::Decode`] for malformed JSON, unknown keys, or an unknown orientation.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode stack props from string attribute pairs.
    ///
    /// # Errors
    /// Returns [`StyleError::UnknownField`] or [`StyleError::InvalidValue`].
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut args = Self::default();
        for (key, value) in pairs {
            match key {
                "orientation" => args.orientation = value.parse()?,
                other => {
                    return Err(StyleError::UnknownField {
                        field: other.to_string(),
                    });
                }
            }
        }
        Ok(args)
    }

    /// Build the typed configuration around `content`.
    #[must_use]
    pub fn into_config<C>(self, content: impl IntoIterator<Item = C>) -> StackConfig<C> {
        StackConfig::new(content).with_orientation(self.orientation)
    }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StyleError::invalid(field, other)),
    }
}
