mod picker;
mod quiz;
mod result;
mod review;
mod scramble;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Picker => picker::render(frame, area, app),
        AppState::ScramblePrompt => scramble::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
        AppState::Review => review::render(frame, area, app),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, controls: &str) {
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Answer-field problems found while loading the exam.
fn render_diagnostics(frame: &mut Frame, area: Rect, app: &App) {
    if app.diagnostics().is_empty() {
        return;
    }

    let lines: Vec<Line> = app
        .diagnostics()
        .iter()
        .map(|diagnostic| {
            Line::from(Span::styled(
                format!("Warning: {}", diagnostic),
                Style::default().fg(Color::Yellow),
            ))
        })
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
