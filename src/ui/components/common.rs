use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Colour of the border around the field or button that has focus
pub const FOCUS_COLOR: Color = Color::Cyan;

/// Creates a styled panel block
pub fn create_panel_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { FOCUS_COLOR } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Creates an input field block, with a visual cursor when focused
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let input_display = if focused {
        format!("{}█", input_buffer)
    } else {
        input_buffer.to_string()
    };

    Paragraph::new(input_display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
}

/// Creates a selection field block (menu value with a drop-down marker)
pub fn create_selection_paragraph(
    value: Option<&str>,
    field_title: &str,
    marker: &str,
    focused: bool,
) -> Paragraph<'static> {
    let text = match value {
        Some(value) => format!("{} {}", marker, value),
        None => format!("{} ←/→ to choose", marker),
    };
    let style = if value.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(text).block(field_block(field_title, focused)).style(style)
}

/// Creates a single-line checkbox
pub fn create_checkbox_paragraph(label: &str, checkbox: &str, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Paragraph::new(format!("{} {}", checkbox, label)).style(style)
}

/// Style shared by every form's submit button: black when enabled, gray when disabled
pub fn submit_button_style(enabled: bool) -> Style {
    let background = if enabled { Color::Black } else { Color::Gray };
    Style::default().bg(background).fg(Color::White)
}

/// Creates the submit button of a form
pub fn create_submit_button(label: &str, enabled: bool, focused: bool) -> Paragraph<'static> {
    let border_color = if focused { FOCUS_COLOR } else { Color::Gray };
    let mut style = submit_button_style(enabled);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }

    Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across the widget
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", Color::Green, " Select");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const CTRL_F_TOGGLE: InstructionShortcut = ("Ctrl+F", Color::Cyan, " Feedback");
    pub const F_KEYS_CATEGORY: InstructionShortcut = ("F1-F4", Color::Yellow, " Category");
    pub const F9_ICONS: InstructionShortcut = ("F9", Color::Magenta, " Icons");
    pub const Q_QUIT: InstructionShortcut = ("q", Color::Red, " Quit");
}
