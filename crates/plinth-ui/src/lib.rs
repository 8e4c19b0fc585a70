#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Presentational Button and Stack components for Yew.
//!
//! Styling is resolved by pure functions in [`crate::core`] that map each enumerated prop to an inline
//! style record; the [`crate::components`] wrap those records in Yew elements.

pub mod components;
pub mod core;

pub use components::{Button, ButtonProps, Stack, StackProps};
pub use crate::core::args::{ButtonArgs, StackArgs};
pub use crate::core::button::{
    ButtonConfig, ButtonPrimitive, ButtonSize, ButtonVariant, TextColor, resolve_button_style,
};
pub use crate::core::error::{Result, StyleError};
pub use crate::core::stack::{Orientation, StackConfig, StackPrimitive, orientation_style};
pub use crate::core::style::{StyleProperty, StyleRecord};
