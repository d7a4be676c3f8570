//! Status bar component

use ratatui::{layout::Rect, Frame};

use super::common::{create_instructions_paragraph, shortcuts};
use crate::widget::WidgetState;

/// Status bar listing the shortcuts that apply to the widget's current state
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &WidgetState) {
        let instructions = match state {
            WidgetState::Closed | WidgetState::Acknowledged { .. } => vec![
                shortcuts::CTRL_F_TOGGLE,
                shortcuts::SEPARATOR,
                shortcuts::F_KEYS_CATEGORY,
                shortcuts::SEPARATOR,
                shortcuts::F9_ICONS,
                shortcuts::SEPARATOR,
                shortcuts::Q_QUIT,
            ],
            WidgetState::PickerOpen => vec![
                shortcuts::ENTER_SELECT,
                shortcuts::SEPARATOR,
                shortcuts::F_KEYS_CATEGORY,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CLOSE,
            ],
            WidgetState::FormOpen { .. } => vec![
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::F_KEYS_CATEGORY,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CLOSE,
            ],
        };

        f.render_widget(create_instructions_paragraph(&instructions), area);
    }
}
