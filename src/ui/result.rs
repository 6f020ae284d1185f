use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::render_controls;
use crate::app::App;
use crate::models::Grade;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let attempt = app.attempt();
    let grade_color = get_grade_color(attempt.grade());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], app, grade_color);
    render_mistake_preview(frame, chunks[2], app);

    let controls = if app.can_pick_another() {
        "v view incorrect  ·  r restart  ·  p pick another  ·  q quit"
    } else {
        "v view incorrect  ·  r restart  ·  q quit"
    };
    render_controls(frame, chunks[3], controls);
}

fn get_grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Cyan,
        Grade::NeedsImprovement => Color::Yellow,
        Grade::Poor => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, app: &App, grade_color: Color) {
    let attempt = app.attempt();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "EXAM FINISHED",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.2}%)",
                attempt.score,
                attempt.total,
                attempt.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            attempt.grade().message(),
            Style::default().fg(grade_color),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_mistake_preview(frame: &mut Frame, area: Rect, app: &App) {
    let mistakes = &app.attempt().mistakes;
    let lines: Vec<Line> = if mistakes.is_empty() {
        vec![Line::from(Span::styled(
            " No incorrect answers.",
            Style::default().fg(Color::Green),
        ))]
    } else {
        mistakes
            .iter()
            .enumerate()
            .map(|(index, mistake)| {
                Line::from(vec![
                    Span::styled(" - ", Style::default().fg(Color::Red)),
                    Span::styled(
                        format!("{:2}. ", index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        truncate_question(&mistake.prompt),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
