//! Core UI functionality for feedback-fab.
//!
//! # Module Components
//!
//! - [`actions`] - Actions produced by input and applied to the widget
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//!
//! Components turn terminal events into [`Action`]s in `handle_*_events`,
//! then apply them in [`Component::update`]. Anything a component does not
//! consume is passed back to the caller.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
