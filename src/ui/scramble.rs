use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{render_controls, render_diagnostics};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.exam_name().to_uppercase(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} questions loaded", app.total_questions()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Scramble the questions?",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("y / n".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    render_diagnostics(frame, chunks[2], app);
    render_controls(frame, chunks[3], "y scramble  ·  n keep order  ·  q quit");
}
