//! feedback-fab - A floating feedback widget for terminal applications
//!
//! A single toggle button in the bottom-right corner reveals four feedback
//! categories. Each category opens a short form; submitting it shows a
//! short acknowledgement that disappears on its own after five seconds.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`widget`] - Widget state machine, forms and dismissal timer
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Feedback widget core, independent of the terminal
pub mod widget;

pub use widget::{Category, WidgetController, WidgetState};
