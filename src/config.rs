use std::path::PathBuf;

/// How letter answers are checked against the option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// A letter answer is taken as-is, even if it names no option.
    #[default]
    Lenient,
    /// A letter answer past the last option is marked invalid.
    Strict,
}

/// Whether questions get shuffled after load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrambleChoice {
    /// Ask the user once the exam is loaded.
    #[default]
    Ask,
    Never,
    /// Shuffle; a seed makes the order reproducible.
    Always { seed: Option<u64> },
}

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct ExamConfig {
    /// Exam file given directly; skips the picker.
    pub exam: Option<PathBuf>,
    /// Directory the picker scans for exam files.
    pub dir: PathBuf,
    pub parse_mode: ParseMode,
    pub scramble: ScrambleChoice,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            exam: None,
            dir: PathBuf::from("."),
            parse_mode: ParseMode::default(),
            scramble: ScrambleChoice::default(),
        }
    }
}
