//! TUI rendering

use model_picker::app::{App, Notice};
use model_picker::ui::{ModelSelectorWidget, ProviderAvatar, colors};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the main screen with the drawer on top
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_main(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);

    frame.render_widget(
        ModelSelectorWidget::new(app.selector(), &app.search),
        frame.area(),
    );
}

fn render_main(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let current = app.current_model().map_or_else(
        || {
            Line::from(Span::styled(
                "No model selected",
                Style::default().fg(colors::TEXT_DIM),
            ))
        },
        |model| ProviderAvatar::from_id(Some(model.provider_name())).labelled(model.label()),
    );

    let lines = vec![
        Line::from(Span::styled(
            "Current model",
            Style::default().fg(colors::TEXT_DIM),
        )),
        current,
    ];

    let block = Block::default()
        .title(" Model Picker ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = match &app.host.notice {
        Some(Notice::Error(message)) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(colors::ACCENT_NEGATIVE),
        )),
        Some(Notice::Status(message)) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        None => Line::from(Span::styled(
            "m models • q quit",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
