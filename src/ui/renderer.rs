//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::time::Duration;

use super::components::{StatusBar, WidgetComponent};
use super::core::{Action, Component, EventHandler, EventType};
use crate::config::Config;
use crate::constants::{HOST_PAGE_TEXT, HOST_PAGE_TITLE};
use crate::icons::IconService;
use crate::widget::WidgetController;

/// Run the main TUI application
pub async fn run_app(config: &Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut widget = WidgetComponent::new(
        WidgetController::new(),
        IconService::new(config.ui.icon_theme),
        config.ui.mouse_enabled,
    );
    let mut events = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    // Main application loop
    let res = run_ui(&mut terminal, &mut widget, &mut events).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    widget: &mut WidgetComponent,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_screen(f, widget))?;

        let action = match events.next_event().await? {
            EventType::Key(key) => widget.handle_key_events(key),
            EventType::Mouse(mouse) => widget.handle_mouse_events(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        if widget.update(action) == Action::Quit {
            log::info!("Quit requested");
            return Ok(());
        }

        widget.process_background_actions();
    }
}

/// Draw the host page, the status bar and the floating widget on top
pub fn render_screen(f: &mut Frame, widget: &mut WidgetComponent) {
    let [page_area, status_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

    let page = Paragraph::new(HOST_PAGE_TEXT)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(HOST_PAGE_TITLE),
        );
    f.render_widget(page, page_area);

    StatusBar::render(f, status_area, widget.controller().state());
    widget.render(f, page_area);
}
