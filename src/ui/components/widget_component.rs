//! Floating feedback widget drawn over the host screen.
//!
//! This component owns the [`WidgetController`] and everything that only
//! matters on screen: which picker button is highlighted, which form field has
//! focus, and where the clickable surfaces were drawn last frame.

use crate::constants::BUTTON_SUBMIT;
use crate::icons::IconService;
use crate::ui::components::common::{
    create_checkbox_paragraph, create_input_paragraph, create_instructions_paragraph, create_panel_block,
    create_selection_paragraph, create_submit_button, shortcuts, FOCUS_COLOR,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::widget::{Category, FieldEdit, FieldValue, FieldView, FormVariant, WidgetController, WidgetState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Clickable surfaces recorded while rendering
#[derive(Debug, Clone, Default)]
struct HitAreas {
    toggle: Rect,
    picker: Vec<Rect>,
    fields: Vec<Rect>,
    submit: Option<Rect>,
}

pub struct WidgetComponent {
    controller: WidgetController,
    icons: IconService,
    mouse_enabled: bool,
    picker_cursor: usize,
    focus: usize,
    focus_owner: Option<Category>,
    hit_areas: HitAreas,
}

impl WidgetComponent {
    pub fn new(controller: WidgetController, icons: IconService, mouse_enabled: bool) -> Self {
        Self {
            controller,
            icons,
            mouse_enabled,
            picker_cursor: 0,
            focus: 0,
            focus_owner: None,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn controller(&self) -> &WidgetController {
        &self.controller
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    /// Index of the focused form element; the submit button comes after the fields
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn picker_cursor(&self) -> usize {
        self.picker_cursor
    }

    /// Apply fired dismissal timers
    pub fn process_background_actions(&mut self) -> usize {
        self.controller.process_background_actions()
    }

    /// Focus starts on the first field whenever a different form is mounted
    fn sync_focus(&mut self) {
        let active = self.controller.active_category();
        if active != self.focus_owner {
            self.focus = 0;
            self.focus_owner = active;
        }
        let slots = self.focus_slots();
        if slots > 0 && self.focus >= slots {
            self.focus = slots - 1;
        }
    }

    /// Number of focusable elements in the current form
    fn focus_slots(&self) -> usize {
        self.controller.form().map_or(0, |form| form.fields().len() + 1)
    }

    fn submit_focused(&self) -> bool {
        let slots = self.focus_slots();
        slots > 0 && self.focus == slots - 1
    }

    fn focused_field_is_flag(&self) -> bool {
        self.controller
            .form()
            .and_then(|form| form.fields().get(self.focus).map(|field| matches!(field.value, FieldValue::Flag(_))))
            .unwrap_or(false)
    }

    fn move_focus(&mut self, forward: bool) {
        let slots = self.focus_slots();
        if slots == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % slots
        } else {
            (self.focus + slots - 1) % slots
        };
    }

    fn move_picker(&mut self, forward: bool) {
        let count = Category::ALL.len();
        self.picker_cursor = if forward {
            (self.picker_cursor + 1) % count
        } else {
            (self.picker_cursor + count - 1) % count
        };
    }

    fn handle_form_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ToggleWidget,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Enter if self.submit_focused() => {
                if self.controller.can_submit() {
                    Action::SubmitForm
                } else {
                    Action::None
                }
            }
            KeyCode::Enter => Action::FocusNext,
            KeyCode::Backspace => Action::EditField(FieldEdit::Backspace),
            KeyCode::Left => Action::EditField(FieldEdit::PreviousChoice),
            KeyCode::Right => Action::EditField(FieldEdit::NextChoice),
            KeyCode::Char(' ') if self.focused_field_is_flag() => Action::EditField(FieldEdit::Toggle),
            KeyCode::Char(c) => Action::EditField(FieldEdit::Insert(c)),
            _ => Action::None,
        }
    }

    fn render_picker(&mut self, f: &mut Frame, rect: Rect) {
        let active = self.controller.active_category();
        let areas = LayoutManager::picker_areas(rect, active.is_some(), Category::ALL.len() as u16);

        for (category, area) in Category::ALL.iter().zip(areas.iter()) {
            let highlighted = match active {
                Some(active) => active == *category,
                None => self.picker_cursor == category.index(),
            };
            let style = if highlighted {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let button = Paragraph::new(self.icons.category(*category))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(Clear, *area);
            f.render_widget(button, *area);
        }

        // Tooltip with the highlighted category's label, left of the column
        if active.is_none() {
            if let (Some(category), Some(area)) =
                (Category::from_index(self.picker_cursor), areas.get(self.picker_cursor))
            {
                let label = category.label();
                let width = (label.chars().count() as u16 + 2).min(area.x.saturating_sub(rect.x));
                if width > 0 {
                    let tooltip = Rect::new(area.x - width, area.y + 1, width, 1).intersection(rect);
                    f.render_widget(Clear, tooltip);
                    f.render_widget(
                        Paragraph::new(format!(" {} ", label)).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
                        tooltip,
                    );
                }
            }
        }

        self.hit_areas.picker = areas;
    }

    fn render_ack(&self, f: &mut Frame, rect: Rect) {
        if let Some(message) = self.controller.ack_message() {
            let area = LayoutManager::ack_area(rect, message.lines().len() as u16);
            let text = Text::from(message.lines().iter().map(|line| Line::from(*line)).collect::<Vec<_>>());
            let paragraph = Paragraph::new(text)
                .style(Style::default().bg(Color::White).fg(Color::Black))
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(Clear, area);
            f.render_widget(paragraph, area);
        }
    }

    fn render_toggle(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::toggle_area(rect);
        let button = Paragraph::new(self.icons.toggle(self.controller.is_open()))
            .alignment(Alignment::Center)
            .style(Style::default().bg(Color::White).fg(Color::Black).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(Clear, area);
        f.render_widget(button, area);
        self.hit_areas.toggle = area;
    }
}

/// Rows taken by one field inside the form panel
fn field_height(field: &FieldView<'_>) -> u16 {
    match field.value {
        FieldValue::Flag(_) => 1,
        FieldValue::Text(_) if field.multiline => 5,
        _ => 3,
    }
}

/// Total panel height for `fields`: fields, submit button, instructions and borders
pub fn form_panel_height(fields: &[FieldView<'_>]) -> u16 {
    fields.iter().map(field_height).sum::<u16>() + 3 + 1 + 2
}

/// Draw `form` in a panel above the toggle row and return the field and submit areas
fn render_form(
    f: &mut Frame,
    rect: Rect,
    form: &dyn FormVariant,
    icons: &IconService,
    focus: usize,
) -> (Vec<Rect>, Rect) {
    let fields = form.fields();
    let panel = LayoutManager::panel_area(rect, form_panel_height(&fields));
    let block = create_panel_block(form.category().form_title(), Color::White);
    let inner = block.inner(panel);
    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    let mut constraints: Vec<Constraint> = fields.iter().map(|field| Constraint::Length(field_height(field))).collect();
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (index, field) in fields.iter().enumerate() {
        let focused = focus == index;
        let title = if field.required {
            format!("{} {}", field.label, icons.required())
        } else {
            field.label.to_string()
        };
        match field.value {
            FieldValue::Text(value) => f.render_widget(create_input_paragraph(value, &title, focused), rows[index]),
            FieldValue::Choice(value) => f.render_widget(
                create_selection_paragraph(value, &title, icons.choice(), focused),
                rows[index],
            ),
            FieldValue::Flag(checked) => f.render_widget(
                create_checkbox_paragraph(field.label, icons.checkbox(checked), focused),
                rows[index],
            ),
        }
    }

    let submit_area = rows[fields.len()];
    f.render_widget(
        create_submit_button(BUTTON_SUBMIT, form.can_submit(), focus == fields.len()),
        submit_area,
    );
    f.render_widget(
        create_instructions_paragraph(&[
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CLOSE,
        ]),
        rows[fields.len() + 1],
    );

    (rows[..fields.len()].to_vec(), submit_area)
}

impl Component for WidgetComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('f') => Action::ToggleWidget,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::F(n @ 1..=4) => {
                return Category::from_index(usize::from(n - 1)).map_or(Action::None, Action::SelectCategory);
            }
            KeyCode::F(9) => return Action::CycleIconTheme,
            _ => {}
        }

        match self.controller.state() {
            WidgetState::Closed | WidgetState::Acknowledged { .. } => match key.code {
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
            WidgetState::PickerOpen => match key.code {
                KeyCode::Esc => Action::ToggleWidget,
                KeyCode::Up | KeyCode::Left => Action::PickerPrevious,
                KeyCode::Down | KeyCode::Right => Action::PickerNext,
                KeyCode::Enter => Action::PickerConfirm,
                _ => Action::None,
            },
            WidgetState::FormOpen { .. } => self.handle_form_key(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let (column, row) = (mouse.column, mouse.row);

        if LayoutManager::contains(self.hit_areas.toggle, column, row) {
            return Action::ToggleWidget;
        }
        if let Some(index) = self
            .hit_areas
            .picker
            .iter()
            .position(|area| LayoutManager::contains(*area, column, row))
        {
            return Category::from_index(index).map_or(Action::None, Action::SelectCategory);
        }
        if let Some(submit) = self.hit_areas.submit {
            if LayoutManager::contains(submit, column, row) {
                // A disabled submit button does not react to clicks
                return if self.controller.can_submit() {
                    Action::SubmitForm
                } else {
                    Action::None
                };
            }
        }
        if let Some(index) = self
            .hit_areas
            .fields
            .iter()
            .position(|area| LayoutManager::contains(*area, column, row))
        {
            self.focus = index;
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        self.sync_focus();
        let remaining = match action {
            Action::ToggleWidget => {
                self.controller.toggle();
                Action::None
            }
            Action::SelectCategory(category) => {
                self.controller.select_category(category);
                self.picker_cursor = category.index();
                Action::None
            }
            Action::PickerNext => {
                self.move_picker(true);
                Action::None
            }
            Action::PickerPrevious => {
                self.move_picker(false);
                Action::None
            }
            Action::PickerConfirm => {
                if matches!(self.controller.state(), WidgetState::PickerOpen) {
                    if let Some(category) = Category::from_index(self.picker_cursor) {
                        self.controller.select_category(category);
                    }
                }
                Action::None
            }
            Action::EditField(edit) => {
                let focus = self.focus;
                if let Some(form) = self.controller.form_mut() {
                    form.apply(focus, edit);
                }
                Action::None
            }
            Action::FocusNext => {
                self.move_focus(true);
                Action::None
            }
            Action::FocusPrevious => {
                self.move_focus(false);
                Action::None
            }
            Action::SubmitForm => {
                if !self.controller.submit() {
                    log::debug!("Submit action ignored");
                }
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("Icon theme switched to {:?}", self.icons.theme());
                Action::None
            }
            Action::Quit => Action::Quit,
            Action::None => Action::None,
        };
        self.sync_focus();
        remaining
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sync_focus();
        self.hit_areas = HitAreas::default();

        if self.controller.is_open() {
            self.render_picker(f, rect);
        }

        if let Some(form) = self.controller.form() {
            let (fields, submit) = render_form(f, rect, form, &self.icons, self.focus);
            self.hit_areas.fields = fields;
            self.hit_areas.submit = Some(submit);
        }

        self.render_ack(f, rect);
        self.render_toggle(f, rect);
    }
}
