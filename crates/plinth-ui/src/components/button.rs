//! Clickable button with variant, size, and optional text color.

use crate::core::button::{ButtonSize, ButtonVariant, TextColor, resolve_button_style};
use yew::prelude::*;

/// Props for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Content rendered inside the button.
    #[prop_or_default]
    pub children: Children,
    /// Visual variant, primary when omitted.
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    /// Size token, medium when omitted.
    #[prop_or(ButtonSize::Md)]
    pub size: ButtonSize,
    /// Explicit text color; omitted leaves the text color to the host stylesheet.
    #[prop_or_default]
    pub color: Option<TextColor>,
    /// Disables the native element.
    #[prop_or_default]
    pub disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Styled `<button>` element.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let style = resolve_button_style(props.variant, props.size, props.color);

    // The native element suppresses click dispatch while disabled.
    html! {
        <button
            style={style.to_css()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
