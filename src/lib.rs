//! # exam-runner
//!
//! A terminal exam-taking utility. Multiple-choice questions are loaded from
//! `.exam` files, asked one at a time, scored, and wrong answers can be
//! reviewed before retaking the exam.
//!
//! ## File format
//!
//! One question per line, fields separated by `|`, options by `;`:
//!
//! ```text
//! 2+2=?|3;4;5|2
//! Capital of France?|Rome;Paris;Madrid|b
//! ```
//!
//! The answer is a 1-based option number or the option's letter.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_runner::{load_exam, session, ParseMode, StdConsole};
//!
//! fn main() -> Result<(), exam_runner::ExamError> {
//!     let parsed = load_exam("math.exam", ParseMode::Lenient)?;
//!     let mut console = StdConsole::stdio();
//!     let attempt = session::run(&parsed.exam, &mut console)?;
//!     println!("{}", exam_runner::review::format_mistakes(&attempt.mistakes));
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod console;
mod data;
mod error;
mod models;
pub mod plain;
pub mod review;
pub mod session;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Exit};
pub use config::{ExamConfig, ParseMode, ScrambleChoice};
pub use console::{AnswerSource, Console, DisplaySink, StdConsole};
pub use data::{
    choose_exam, discover_exams, display_name, load_exam, parse, Diagnostic, DiagnosticKind, Parsed,
    EXAM_EXTENSION,
};
pub use error::{ExamError, LoadError};
pub use models::{option_label, AnswerKey, AppState, Attempt, ExamSet, Grade, Mistake, Question};
pub use session::{Outcome, Session};

/// Build the full-screen app for `config`: straight into the given exam, or
/// at the picker over the exam directory.
pub fn build_app(config: &ExamConfig) -> Result<App, ExamError> {
    if let Some(path) = &config.exam {
        let parsed = load_exam(path, config.parse_mode)?;
        return Ok(App::with_exam(display_name(path), parsed, config.scramble));
    }

    let exams = discover_exams(&config.dir)?;
    if exams.is_empty() {
        return Err(ExamError::NoExamFiles {
            dir: config.dir.clone(),
        });
    }
    Ok(App::with_picker(exams, config.parse_mode, config.scramble))
}

/// Run the full-screen front-end until the user quits or the flow fails.
///
/// This takes over the terminal and restores it before returning.
pub fn run_tui(mut app: App) -> Result<Exit, ExamError> {
    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, &mut app);
    terminal::restore()?;
    result
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<Exit, ExamError> {
    loop {
        if let Some(exit) = app.exit() {
            return Ok(exit.clone());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_input(app, key.code);
        }
    }
}

fn handle_input(app: &mut App, key: KeyCode) {
    match app.state {
        AppState::Picker => handle_picker_input(app, key),
        AppState::ScramblePrompt => handle_scramble_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::Review => handle_review_input(app, key),
    }
}

fn handle_picker_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_exam(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_exam(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.select_exam_number(c.to_digit(10).unwrap_or(0) as usize)
        }
        KeyCode::Enter => app.open_selected_exam(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_scramble_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_scramble(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => app.answer_scramble(false),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Every character is an answer, including ones that name no option.
fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.key_in_quiz(c),
        KeyCode::Enter if app.feedback().is_some() => app.next_question(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('v') | KeyCode::Char('V') => app.view_mistakes(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.pick_another(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_review_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_review_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_review_up(),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => app.back_to_result(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
