use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use super::render_controls;
use crate::app::App;
use crate::review::{report_lines, REPORT_HEADER};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(area);

    let lines: Vec<Line> = report_lines(&app.attempt().mistakes)
        .into_iter()
        .map(style_report_line)
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.review_scroll() as u16, 0));
    frame.render_widget(widget, chunks[0]);

    render_controls(frame, chunks[1], "j/k scroll  ·  esc back  ·  q quit");
}

fn style_report_line(line: String) -> Line<'static> {
    let style = if line == REPORT_HEADER {
        Style::default().fg(Color::Cyan).bold()
    } else if line.trim_start().starts_with("Your answer") {
        Style::default().fg(Color::Red)
    } else if line.trim_start().starts_with("Correct answer") {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(line, style))
}
