//! Yew function components rendering the resolved styles.

pub mod button;
pub mod foundations;
pub mod stack;

pub use button::{Button, ButtonProps};
pub use stack::{Stack, StackProps};
