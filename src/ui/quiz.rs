use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{render_controls, render_diagnostics};
use crate::app::App;
use crate::models::Question;
use crate::session::{outcome_message, Outcome};

const MAX_WARNING_LINES: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.displayed_question() else {
        return;
    };
    let warning_rows = warnings_height(app);
    let chunks = Layout::vertical([
        Constraint::Length(warning_rows),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    if warning_rows > 0 {
        render_diagnostics(frame, chunks[0], app);
    }
    render_progress(frame, chunks[1], app);
    render_question_text(frame, chunks[2], &question.prompt);
    render_options(frame, chunks[3], question, app.feedback());

    let controls = match app.feedback() {
        Some(outcome) => {
            render_feedback(frame, chunks[4], app, &outcome);
            "any key continue  ·  esc quit"
        }
        None => "type the letter of your answer  ·  esc quit",
    };
    render_controls(frame, chunks[5], controls);
}

/// Load warnings sit above the first question until it is answered.
fn warnings_height(app: &App) -> u16 {
    if app.diagnostics().is_empty() || app.answered() > 0 || app.feedback().is_some() {
        return 0;
    }
    app.diagnostics().len().min(MAX_WARNING_LINES) as u16 + 1
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}  ·  {}/{}",
        app.exam_name(),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, feedback: Option<Outcome>) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (label, option) in question.labeled_options() {
        let style = match feedback {
            Some(_) if question.correct_answer.matches(label) => Style::default().fg(Color::Green).bold(),
            Some(Outcome::Incorrect { given, .. }) if given == label => Style::default().fg(Color::Red).bold(),
            _ => Style::default().fg(Color::Gray),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", label), style),
            Span::styled(option, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App, outcome: &Outcome) {
    let color = if outcome.is_correct() {
        Color::Green
    } else {
        Color::Red
    };

    let content = vec![
        Line::from(Span::styled(
            outcome_message(outcome),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("Current Score: {}/{}", app.score(), app.answered()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}
