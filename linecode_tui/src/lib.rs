pub mod component;
pub mod components;
pub mod error;
mod styles;
pub mod tui;
pub mod widgets;
