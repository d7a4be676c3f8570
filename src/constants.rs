//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

use std::time::Duration;

/// How long an acknowledgement stays on screen before it is dismissed
pub const ACK_DISMISS_AFTER: Duration = Duration::from_millis(5000);

// Category Labels (shown as button tooltips in the picker)
pub const LABEL_ISSUE: &str = "Report an issue";
pub const LABEL_FEEDBACK: &str = "Share Feedback";
pub const LABEL_SUGGESTION: &str = "Give Suggestion";
pub const LABEL_CONTACT: &str = "Contact Us";

// Form Titles
pub const TITLE_ISSUE_FORM: &str = "Report an Issue";
pub const TITLE_FEEDBACK_FORM: &str = "Share Feedback";
pub const TITLE_SUGGESTION_FORM: &str = "Give Suggestion";
pub const TITLE_CONTACT_FORM: &str = "Contact Us";

// Field Labels
pub const FIELD_ISSUE_SECTION: &str = "Choose a section";
pub const FIELD_ISSUE_DETAIL: &str = "Describe the issue in detail";
pub const FIELD_FREE_TEXT: &str = "Write here...";
pub const FIELD_ANONYMOUS: &str = "Send feedback anonymously";
pub const FIELD_CONTACT_NAME: &str = "Your Name";
pub const FIELD_CONTACT_EMAIL: &str = "Your Email";
pub const FIELD_CONTACT_MESSAGE: &str = "Your Message";
pub const BUTTON_SUBMIT: &str = "Submit";

// Acknowledgement Messages, one entry per displayed line
pub const ACK_ISSUE: &[&str] = &[
    "Thank you for reporting the issue!",
    "We will review it and get back to you soon.",
];
pub const ACK_FEEDBACK: &[&str] = &["Thank you for your valuable feedback"];
pub const ACK_SUGGESTION: &[&str] = &["Thank you for your valuable suggestion"];
pub const ACK_CONTACT: &[&str] = &[
    "Thank you for reaching out to us!",
    "We will get back to you as soon as possible.",
];

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const HOST_PAGE_TITLE: &str = " feedback-fab ";
pub const HOST_PAGE_TEXT: &str = "This page hosts a floating feedback widget in the bottom-right corner.";

// UI Layout Constants
/// Width and height of the floating toggle button
pub const TOGGLE_WIDTH: u16 = 7;
pub const TOGGLE_HEIGHT: u16 = 3;
/// Width of one category button in the picker
pub const PICKER_BUTTON_WIDTH: u16 = 7;
/// Gap between picker buttons and between floating surfaces
pub const SURFACE_GAP: u16 = 1;
/// Maximum width of the form and acknowledgement panels
pub const PANEL_MAX_WIDTH: u16 = 48;
/// Distance kept between floating surfaces and the terminal edges
pub const EDGE_MARGIN: u16 = 1;
/// Minimum and maximum event loop tick, in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
