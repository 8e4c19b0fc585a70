//! Inline style records produced by the component resolvers.
//!
//! # Design
//! - Properties form a closed set so resolvers can only write attributes the components own.
//! - A record keeps declaration order; overwriting a key keeps its original position.

use std::fmt::{self, Display, Formatter};

/// Style attributes written by the components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `outline`.
    Outline,
    /// `border`.
    Border,
    /// `cursor`.
    Cursor,
    /// `border-radius`.
    BorderRadius,
    /// `color` (text color).
    Color,
    /// `background-color`.
    BackgroundColor,
    /// `padding`.
    Padding,
    /// `display`.
    Display,
    /// `flex-direction`.
    FlexDirection,
    /// `gap`.
    Gap,
}

impl StyleProperty {
    /// CSS property name used when serialising the record.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Border => "border",
            Self::Cursor => "cursor",
            Self::BorderRadius => "border-radius",
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Padding => "padding",
            Self::Display => "display",
            Self::FlexDirection => "flex-direction",
            Self::Gap => "gap",
        }
    }
}

/// Ordered set of style declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRecord {
    declarations: Vec<(StyleProperty, &'static str)>,
}

impl StyleRecord {
    /// Empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Record holding a single declaration.
    #[must_use]
    pub fn single(property: StyleProperty, value: &'static str) -> Self {
        let mut record = Self::new();
        record.set(property, value);
        record
    }

    /// Set a declaration, replacing the value in place if the property is already present.
    pub fn set(&mut self, property: StyleProperty, value: &'static str) {
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Builder form of [`StyleRecord::set`].
    #[must_use]
    pub fn with(mut self, property: StyleProperty, value: &'static str) -> Self {
        self.set(property, value);
        self
    }

    /// Apply every declaration of `other` on top of this record; `other` wins on collision.
    pub fn merge(&mut self, other: &Self) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Builder form of [`StyleRecord::merge`].
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }

    /// Value currently assigned to `property`.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&'static str> {
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| *value)
    }

    /// Whether `property` has been assigned.
    #[must_use]
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.get(property).is_some()
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the record has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &'static str)> + '_ {
        self.declarations.iter().copied()
    }

    /// Serialise as an inline `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Display for StyleRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.declarations.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{}: {value};", property.css_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{StyleProperty, StyleRecord};

    #[test]
    fn set_overwrites_in_place() {
        let mut record = StyleRecord::new()
            .with(StyleProperty::Color, "white")
            .with(StyleProperty::Padding, "1rem");
        record.set(StyleProperty::Color, "black");

        let order: Vec<_> = record.iter().collect();
        assert_eq!(
            order,
            vec![
                (StyleProperty::Color, "black"),
                (StyleProperty::Padding, "1rem"),
            ]
        );
    }

    #[test]
    fn merge_later_record_wins() {
        let base = StyleRecord::new()
            .with(StyleProperty::Display, "block")
            .with(StyleProperty::Gap, "0");
        let overlay = StyleRecord::new()
            .with(StyleProperty::Gap, "1rem")
            .with(StyleProperty::FlexDirection, "row");

        let merged = base.merged(&overlay);
        assert_eq!(merged.get(StyleProperty::Display), Some("block"));
        assert_eq!(merged.get(StyleProperty::Gap), Some("1rem"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn css_output_follows_declaration_order() {
        let record = StyleRecord::single(StyleProperty::Outline, "none")
            .with(StyleProperty::BorderRadius, "10px");
        assert_eq!(record.to_css(), "outline: none; border-radius: 10px;");
        assert_eq!(StyleRecord::new().to_css(), "");
        assert!(StyleRecord::default().is_empty());
    }
}
