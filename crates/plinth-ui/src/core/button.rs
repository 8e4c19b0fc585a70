//! Button style resolution and render plan.
//!
//! # Design
//! - Each style dimension (variant, size, text color) resolves independently through an
//!   exhaustive `match`, so a new enum value cannot ship without a style.
//! - Dimensions merge in a fixed order: base, color override, variant, size.
//! - Disabled gating belongs to the host element; [`ButtonPrimitive`] mirrors it for non-DOM hosts.

use crate::core::error::StyleError;
use crate::core::style::{StyleProperty, StyleRecord};
use serde::Deserialize;
use std::str::FromStr;
use yew::Callback;

/// Visual variant of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Blue background.
    Primary,
    /// Gray background.
    Secondary,
}

impl ButtonVariant {
    /// All variants in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Primary, Self::Secondary]
    }

    /// Lowercase token for the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Text color the variant is designed around when no explicit color is supplied.
    #[must_use]
    pub const fn default_text_color(self) -> TextColor {
        match self {
            Self::Primary => TextColor::White,
            Self::Secondary => TextColor::Black,
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            other => Err(StyleError::invalid("variant", other)),
        }
    }
}

/// Button size token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
}

impl ButtonSize {
    /// All sizes from smallest to largest.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Sm, Self::Md, Self::Lg]
    }

    /// Lowercase token for the size.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            other => Err(StyleError::invalid("size", other)),
        }
    }
}

/// Explicit text color override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// White text.
    White,
    /// Black text.
    Black,
    /// Gray text.
    Gray,
}

impl TextColor {
    /// All supported text colors.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::White, Self::Black, Self::Gray]
    }

    /// CSS color keyword, identical to the prop token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Gray => "gray",
        }
    }
}

impl FromStr for TextColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            "gray" => Ok(Self::Gray),
            other => Err(StyleError::invalid("color", other)),
        }
    }
}

/// Fixed attributes shared by every button.
#[must_use]
pub fn base_style() -> StyleRecord {
    StyleRecord::new()
        .with(StyleProperty::Outline, "none")
        .with(StyleProperty::Border, "none")
        .with(StyleProperty::Cursor, "pointer")
        .with(StyleProperty::BorderRadius, "10px")
}

/// Background for a variant.
#[must_use]
pub fn variant_style(variant: ButtonVariant) -> StyleRecord {
    let background = match variant {
        ButtonVariant::Primary => "blue",
        ButtonVariant::Secondary => "gray",
    };
    StyleRecord::single(StyleProperty::BackgroundColor, background)
}

/// Padding for a size.
#[must_use]
pub fn size_style(size: ButtonSize) -> StyleRecord {
    let padding = match size {
        ButtonSize::Sm => "0.5rem",
        ButtonSize::Md => "0.75rem",
        ButtonSize::Lg => "1rem",
    };
    StyleRecord::single(StyleProperty::Padding, padding)
}

/// Text color declaration carrying the supplied color verbatim.
#[must_use]
pub fn color_style(color: TextColor) -> StyleRecord {
    StyleRecord::single(StyleProperty::Color, color.as_str())
}

/// Resolve the merged inline style for a button.
#[must_use]
pub fn resolve_button_style(
    variant: ButtonVariant,
    size: ButtonSize,
    color: Option<TextColor>,
) -> StyleRecord {
    let mut style = base_style();
    if let Some(color) = color {
        style.merge(&color_style(color));
    }
    style.merge(&variant_style(variant));
    style.merge(&size_style(size));
    tracing::debug!(
        component = "button",
        variant = variant.as_str(),
        size = size.as_str(),
        css = %style,
        "resolved style"
    );
    style
}

/// Typed button configuration for a single render.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonConfig<C> {
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ButtonSize,
    /// Explicit text color; `None` leaves the text color to the host.
    pub color: Option<TextColor>,
    /// Whether activation is suppressed. Defaults to `false`.
    pub disabled: bool,
    /// Handler invoked on each activation while enabled.
    pub on_activate: Option<Callback<()>>,
    /// Content rendered inside the button, untouched.
    pub content: C,
}

impl<C> ButtonConfig<C> {
    /// Build a configuration from the required props; optional props take their defaults.
    #[must_use]
    pub const fn new(variant: ButtonVariant, size: ButtonSize, content: C) -> Self {
        Self {
            variant,
            size,
            color: None,
            disabled: false,
            on_activate: None,
            content,
        }
    }

    /// Set an explicit text color.
    #[must_use]
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach the activation handler.
    #[must_use]
    pub fn on_activate(mut self, handler: Callback<()>) -> Self {
        self.on_activate = Some(handler);
        self
    }

    /// Merged inline style for this configuration.
    #[must_use]
    pub fn resolve_style(&self) -> StyleRecord {
        resolve_button_style(self.variant, self.size, self.color)
    }

    /// Explicit color when supplied, otherwise the variant's own text color.
    #[must_use]
    pub fn effective_text_color(&self) -> TextColor {
        self.color.unwrap_or_else(|| self.variant.default_text_color())
    }

    /// Produce the invocation handed to the host button element.
    #[must_use]
    pub fn render(self) -> ButtonPrimitive<C> {
        ButtonPrimitive {
            style: self.resolve_style(),
            disabled: self.disabled,
            on_activate: self.on_activate,
            content: self.content,
        }
    }
}

/// Host button invocation: resolved style plus passthrough props.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonPrimitive<C> {
    /// Merged inline style.
    pub style: StyleRecord,
    /// Native disabled flag.
    pub disabled: bool,
    /// Activation binding.
    pub on_activate: Option<Callback<()>>,
    /// Content forwarded unchanged.
    pub content: C,
}

impl<C> ButtonPrimitive<C> {
    /// Deliver one activation event the way a native button does.
    ///
    /// Returns `true` when the handler ran. Disabled elements never dispatch.
    pub fn dispatch_activation(&self) -> bool {
        if self.disabled {
            return false;
        }
        match &self.on_activate {
            Some(handler) => {
                handler.emit(());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::error::Error;
    use std::rc::Rc;

    fn counting_handler() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        (count, Callback::from(move |()| hits.set(hits.get() + 1)))
    }

    #[test]
    fn variant_background_is_independent_of_size_and_color() {
        for variant in ButtonVariant::all() {
            let expected = match variant {
                ButtonVariant::Primary => "blue",
                ButtonVariant::Secondary => "gray",
            };
            for size in ButtonSize::all() {
                for color in [None, Some(TextColor::Gray), Some(TextColor::Black)] {
                    let style = resolve_button_style(variant, size, color);
                    assert_eq!(style.get(StyleProperty::BackgroundColor), Some(expected));
                }
            }
        }
    }

    #[test]
    fn size_padding_is_independent_of_variant() {
        let table = [
            (ButtonSize::Sm, "0.5rem"),
            (ButtonSize::Md, "0.75rem"),
            (ButtonSize::Lg, "1rem"),
        ];
        for (size, padding) in table {
            for variant in ButtonVariant::all() {
                let style = resolve_button_style(variant, size, None);
                assert_eq!(style.get(StyleProperty::Padding), Some(padding));
            }
        }
    }

    #[test]
    fn color_override_only_touches_text_color() {
        for color in TextColor::all() {
            let with = resolve_button_style(ButtonVariant::Primary, ButtonSize::Md, Some(color));
            let without = resolve_button_style(ButtonVariant::Primary, ButtonSize::Md, None);
            assert_eq!(with.get(StyleProperty::Color), Some(color.as_str()));
            assert_eq!(with.len(), without.len() + 1);
            for (property, value) in without.iter() {
                assert_eq!(with.get(property), Some(value));
            }
        }
    }

    #[test]
    fn omitted_color_leaves_text_color_unset() {
        let config = ButtonConfig::new(ButtonVariant::Secondary, ButtonSize::Sm, "label");
        assert!(!config.resolve_style().contains(StyleProperty::Color));
        assert_eq!(config.effective_text_color(), TextColor::Black);
        assert_eq!(
            config.with_color(TextColor::Gray).effective_text_color(),
            TextColor::Gray
        );
    }

    #[test]
    fn merge_order_is_base_color_variant_size() {
        let style = resolve_button_style(
            ButtonVariant::Primary,
            ButtonSize::Lg,
            Some(TextColor::White),
        );
        assert_eq!(
            style.to_css(),
            "outline: none; border: none; cursor: pointer; border-radius: 10px; \
             color: white; background-color: blue; padding: 1rem;"
        );
    }

    #[test]
    fn enabled_button_dispatches_once_per_activation() {
        let (count, handler) = counting_handler();
        let primitive = ButtonConfig::new(ButtonVariant::Primary, ButtonSize::Md, ())
            .on_activate(handler)
            .render();
        for _ in 0..3 {
            assert!(primitive.dispatch_activation());
        }
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn disabled_button_never_dispatches() {
        let (count, handler) = counting_handler();
        let primitive = ButtonConfig::new(ButtonVariant::Secondary, ButtonSize::Lg, ())
            .with_color(TextColor::Black)
            .disabled(true)
            .on_activate(handler)
            .render();
        assert!(primitive.disabled);
        for _ in 0..5 {
            assert!(!primitive.dispatch_activation());
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn missing_handler_is_a_no_op() {
        let primitive = ButtonConfig::new(ButtonVariant::Primary, ButtonSize::Sm, ()).render();
        assert!(!primitive.dispatch_activation());
    }

    #[test]
    fn tokens_round_trip_through_from_str() -> Result<(), Box<dyn Error>> {
        for variant in ButtonVariant::all() {
            assert_eq!(variant.as_str().parse::<ButtonVariant>()?, variant);
        }
        for size in ButtonSize::all() {
            assert_eq!(size.as_str().parse::<ButtonSize>()?, size);
        }
        for color in TextColor::all() {
            assert_eq!(color.as_str().parse::<TextColor>()?, color);
        }
        Ok(())
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(matches!(
            "tertiary".parse::<ButtonVariant>(),
            Err(StyleError::InvalidValue { field: "variant", .. })
        ));
        assert!(matches!(
            "xl".parse::<ButtonSize>(),
            Err(StyleError::InvalidValue { field: "size", .. })
        ));
        assert!(matches!(
            "Primary".parse::<ButtonVariant>(),
            Err(StyleError::InvalidValue { .. })
        ));
        assert!("red".parse::<TextColor>().is_err());
    }
}
