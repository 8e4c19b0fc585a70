//! Shared rendering helpers for the components.

use crate::core::style::StyleRecord;
use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Renders `tag` with an inline style and the children in their original order.
#[must_use]
pub fn render_container(tag: &'static str, style: &StyleRecord, children: &Children) -> Html {
    let mut node = VTag::new(tag);
    if !style.is_empty() {
        node.add_attribute("style", style.to_css());
    }
    for child in children.iter() {
        node.add_child(child);
    }
    node.into()
}
