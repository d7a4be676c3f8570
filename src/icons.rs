//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the widget,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

use crate::widget::Category;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Glyphs of the floating toggle button
#[derive(Debug, Clone)]
pub struct ToggleIcons {
    pub closed: &'static str,
    pub open: &'static str,
}

/// One glyph per feedback category
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub issue: &'static str,
    pub feedback: &'static str,
    pub suggestion: &'static str,
    pub contact: &'static str,
}

/// Form decoration icons
#[derive(Debug, Clone)]
pub struct FormIcons {
    pub required: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub choice: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub toggle: ToggleIcons,
    pub category: CategoryIcons,
    pub form: FormIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            toggle: ToggleIcons {
                closed: "💬",
                open: "❌",
            },
            category: CategoryIcons {
                issue: "🐞",
                feedback: "💬",
                suggestion: "💡",
                contact: "📧",
            },
            form: FormIcons {
                required: "*",
                checked: "✅",
                unchecked: "⬜",
                choice: "🔽",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            toggle: ToggleIcons {
                closed: "✉",
                open: "✕",
            },
            category: CategoryIcons {
                issue: "⚠",
                feedback: "✎",
                suggestion: "☀",
                contact: "☎",
            },
            form: FormIcons {
                required: "*",
                checked: "☑",
                unchecked: "☐",
                choice: "▾",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            toggle: ToggleIcons {
                closed: "?",
                open: "x",
            },
            category: CategoryIcons {
                issue: "!",
                feedback: "#",
                suggestion: "*",
                contact: "@",
            },
            form: FormIcons {
                required: "*",
                checked: "[x]",
                unchecked: "[ ]",
                choice: "v",
            },
        }
    }

    /// Glyph of the toggle button for the given open state
    #[must_use]
    pub fn toggle(&self, open: bool) -> &'static str {
        let icons = self.icons().toggle;
        if open {
            icons.open
        } else {
            icons.closed
        }
    }

    #[must_use]
    pub fn category(&self, category: Category) -> &'static str {
        let icons = self.icons().category;
        match category {
            Category::Issue => icons.issue,
            Category::Feedback => icons.feedback,
            Category::Suggestion => icons.suggestion,
            Category::Contact => icons.contact,
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons().form;
        if checked {
            icons.checked
        } else {
            icons.unchecked
        }
    }

    #[must_use]
    pub fn choice(&self) -> &'static str {
        self.icons().form.choice
    }

    #[must_use]
    pub fn required(&self) -> &'static str {
        self.icons().form.required
    }
}
