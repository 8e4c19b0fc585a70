//! Stack layout resolution.

use crate::core::error::StyleError;
use crate::core::style::{StyleProperty, StyleRecord};
use serde::Deserialize;
use std::str::FromStr;

/// Gap between stacked children.
pub const STACK_GAP: &str = "1rem";

/// Main axis of a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children laid out in a row.
    #[default]
    Horizontal,
    /// Children laid out in a column.
    Vertical,
}

impl Orientation {
    /// Both orientations, default first.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Horizontal, Self::Vertical]
    }

    /// Lowercase token for the orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for Orientation {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(StyleError::invalid("orientation", other)),
        }
    }
}

/// Flex container style for an orientation.
#[must_use]
pub fn orientation_style(orientation: Orientation) -> StyleRecord {
    let direction = match orientation {
        Orientation::Horizontal => "row",
        Orientation::Vertical => "column",
    };
    let style = StyleRecord::new()
        .with(StyleProperty::Display, "flex")
        .with(StyleProperty::FlexDirection, direction)
        .with(StyleProperty::Gap, STACK_GAP);
    tracing::debug!(
        component = "stack",
        orientation = orientation.as_str(),
        css = %style,
        "resolved style"
    );
    style
}

/// Typed stack configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackConfig<C> {
    /// Layout axis. Defaults to [`Orientation::Horizontal`].
    pub orientation: Orientation,
    /// Children in render order.
    pub content: Vec<C>,
}

impl<C> StackConfig<C> {
    /// Horizontal stack over `content`.
    #[must_use]
    pub fn new(content: impl IntoIterator<Item = C>) -> Self {
        Self {
            orientation: Orientation::default(),
            content: content.into_iter().collect(),
        }
    }

    /// Set the layout axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Container style for this configuration.
    #[must_use]
    pub fn resolve_style(&self) -> StyleRecord {
        orientation_style(self.orientation)
    }

    /// Produce the container invocation handed to the host.
    #[must_use]
    pub fn render(self) -> StackPrimitive<C> {
        StackPrimitive {
            style: self.resolve_style(),
            children: self.content,
        }
    }
}

impl<C> Default for StackConfig<C> {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            content: Vec::new(),
        }
    }
}

/// Host container invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackPrimitive<C> {
    /// Resolved container style.
    pub style: StyleRecord,
    /// Children in input order.
    pub children: Vec<C>,
}
