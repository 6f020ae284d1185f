use std::fmt;

/// The label of the option at `index`: 0 is 'a', 1 is 'b' and so on.
///
/// Labels keep counting past 'z' ('{', '|', ...), so every option has one.
/// Returns `None` only where the count leaves the valid `char` range.
pub fn option_label(index: usize) -> Option<char> {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(u32::from(b'a')))
        .and_then(char::from_u32)
}

/// Which option a question marks as correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    /// Lower-case option label.
    Letter(char),
    /// The answer field could not be mapped to an option. Never matches.
    Invalid,
}

impl AnswerKey {
    /// True when `answer` (already lower-cased) is the correct label.
    pub fn matches(&self, answer: char) -> bool {
        matches!(self, AnswerKey::Letter(letter) if *letter == answer)
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Letter(letter) => write!(f, "{}", letter),
            AnswerKey::Invalid => write!(f, "(invalid)"),
        }
    }
}

/// One multiple-choice question. Prompt and option text are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: AnswerKey,
}

impl Question {
    /// Options paired with their display labels.
    pub fn labeled_options(&self) -> impl Iterator<Item = (char, &str)> {
        self.options
            .iter()
            .enumerate()
            .filter_map(|(index, option)| option_label(index).map(|label| (label, option.as_str())))
    }
}
