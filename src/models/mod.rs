mod attempt;
mod exam;
mod question;

pub use attempt::{Attempt, Grade, Mistake};
pub use exam::ExamSet;
pub use question::{option_label, AnswerKey, Question};

/// Which screen the full-screen front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Picker,
    ScramblePrompt,
    Quiz,
    Result,
    Review,
}
