use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::render_controls;
use crate::app::App;
use crate::data::display_name;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "AVAILABLE EXAMS",
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(title, chunks[0]);

    render_exam_list(frame, chunks[1], app);
    render_controls(frame, chunks[2], "j/k navigate  ·  1-9 jump  ·  enter open  ·  q quit");
}

fn render_exam_list(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_exam();
    let lines: Vec<Line> = app
        .exams()
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let is_selected = index == selected;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{:2}. ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(display_name(path), style),
            ])
        })
        .collect();

    // Keep the selection on screen in long listings.
    let visible = usize::from(area.height.max(1));
    let scroll = selected.saturating_sub(visible - 1);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}
