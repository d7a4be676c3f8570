//! UI module for feedback-fab
//!
//! This module handles terminal rendering, input handling, and the component
//! wrapping the feedback widget.

pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::{render_screen, run_app};
