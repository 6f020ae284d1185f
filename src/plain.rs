//! The line-oriented front-end: picker, exam, score and menu over a
//! [`StdConsole`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::{ExamConfig, ScrambleChoice};
use crate::console::{AnswerSource, DisplaySink, StdConsole};
use crate::data::{choose_exam, discover_exams, display_name, load_exam};
use crate::error::ExamError;
use crate::models::ExamSet;
use crate::review::{report_lines, summary_lines};
use crate::session;

enum MenuChoice {
    ViewMistakes,
    Restart,
    PickAnother,
    Exit,
}

/// Run exams until the user exits.
///
/// Returns `Ok` only on a user-initiated exit; a missing exam directory
/// listing, a bad menu choice or a failed load end the flow with an error.
pub fn run_plain<R: BufRead, W: Write>(
    config: &ExamConfig,
    console: &mut StdConsole<R, W>,
) -> Result<(), ExamError> {
    loop {
        let (path, from_picker) = match &config.exam {
            Some(path) => {
                console.show(&format!("Using exam file: {}", path.display()))?;
                (path.clone(), false)
            }
            None => (pick_exam(config, console)?, true),
        };

        let parsed = load_exam(&path, config.parse_mode)?;
        for diagnostic in &parsed.diagnostics {
            console.show(&format!("Warning: {}", diagnostic))?;
        }

        let mut exam = parsed.exam;
        scramble(&mut exam, config.scramble, console)?;
        let name = display_name(&path);

        'attempts: loop {
            console.clear()?;
            console.show(&format!("Loaded {} questions from {}.", exam.len(), name))?;
            let attempt = session::run(&exam, console)?;
            info!(exam = %name, score = attempt.score, total = attempt.total, "attempt finished");

            loop {
                console.clear()?;
                console.show("")?;
                for line in summary_lines(&attempt) {
                    console.show(&line)?;
                }

                match read_menu_choice(console, from_picker)? {
                    Some(MenuChoice::ViewMistakes) => {
                        console.clear()?;
                        console.show("")?;
                        for line in report_lines(&attempt.mistakes) {
                            console.show(&line)?;
                        }
                        console.pause("\nPress Enter to return to the menu...")?;
                    }
                    Some(MenuChoice::Restart) => continue 'attempts,
                    Some(MenuChoice::PickAnother) => break 'attempts,
                    Some(MenuChoice::Exit) => {
                        console.show("Goodbye!")?;
                        return Ok(());
                    }
                    None => {
                        console.show("Invalid choice. Please try again.")?;
                    }
                }
            }
        }
    }
}

fn pick_exam<R: BufRead, W: Write>(
    config: &ExamConfig,
    console: &mut StdConsole<R, W>,
) -> Result<PathBuf, ExamError> {
    let exams = discover_exams(&config.dir)?;
    if exams.is_empty() {
        return Err(ExamError::NoExamFiles {
            dir: config.dir.clone(),
        });
    }

    console.show("Available exams:")?;
    for (index, exam) in exams.iter().enumerate() {
        console.show(&format!("{}. {}", index + 1, display_name(exam)))?;
    }

    let input = console
        .read_line("Choose an exam by number: ")?
        .unwrap_or_default();
    let path = choose_exam(&exams, &input)?.to_path_buf();
    console.show(&format!("Using selected file: {}", display_name(&path)))?;
    Ok(path)
}

fn scramble<R: BufRead, W: Write>(
    exam: &mut ExamSet,
    choice: ScrambleChoice,
    console: &mut StdConsole<R, W>,
) -> Result<(), ExamError> {
    match choice {
        ScrambleChoice::Never => {}
        ScrambleChoice::Always { seed: Some(seed) } => exam.scramble_seeded(seed),
        ScrambleChoice::Always { seed: None } => exam.scramble(),
        ScrambleChoice::Ask => {
            let answer = console.read_line("Do you want to scramble the exam questions? (y/n): ")?;
            if answer.is_some_and(|a| a.trim_start().starts_with(['y', 'Y'])) {
                exam.scramble();
            }
        }
    }
    Ok(())
}

/// `Ok(None)` for an unrecognised choice. End of input counts as exit.
fn read_menu_choice<R: BufRead, W: Write>(
    console: &mut StdConsole<R, W>,
    from_picker: bool,
) -> Result<Option<MenuChoice>, ExamError> {
    console.show("")?;
    console.show("What would you like to do next?")?;
    console.show("1. View incorrect answers")?;
    console.show("2. Restart this exam")?;
    if from_picker {
        console.show("3. Pick another exam")?;
        console.show("4. Exit")?;
    } else {
        console.show("3. Exit")?;
    }

    let Some(input) = console.read_line("Enter your choice: ")? else {
        return Ok(Some(MenuChoice::Exit));
    };

    let choice = match (input.trim(), from_picker) {
        ("1", _) => Some(MenuChoice::ViewMistakes),
        ("2", _) => Some(MenuChoice::Restart),
        ("3", true) => Some(MenuChoice::PickAnother),
        ("4", true) | ("3", false) => Some(MenuChoice::Exit),
        _ => None,
    };
    Ok(choice)
}
