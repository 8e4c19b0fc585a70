//! Flex container stacking its children along one axis.

use crate::components::foundations::render_container;
use crate::core::stack::{Orientation, orientation_style};
use yew::prelude::*;

/// Props for [`Stack`].
#[derive(Properties, PartialEq)]
pub struct StackProps {
    /// Layout axis, horizontal when omitted.
    #[prop_or_default]
    pub orientation: Orientation,
    /// Stacked children.
    #[prop_or_default]
    pub children: Children,
}

/// Flex `<div>` with a fixed gap between children.
#[function_component(Stack)]
pub fn stack(props: &StackProps) -> Html {
    render_container("div", &orientation_style(props.orientation), &props.children)
}
