//! Core, DOM-free style resolution for the components.
pub mod args;
pub mod button;
pub mod error;
pub mod stack;
pub mod style;
