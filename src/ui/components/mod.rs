//! Reusable UI components

pub mod common;
pub mod status_bar;
pub mod widget_component;

// Component exports
pub use status_bar::StatusBar;
pub use widget_component::WidgetComponent;
