//! Exam file parser.
//!
//! One question per line: `prompt|option;option;...|answer`. There is no
//! escaping, so `|` and `;` cannot appear inside any field.

use std::fmt;

use tracing::{debug, warn};

use crate::config::ParseMode;
use crate::models::{option_label, AnswerKey, ExamSet, Question};

const FIELD_DELIMITER: char = '|';
const OPTION_DELIMITER: char = ';';

/// Why a question's answer field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Numeric answer outside `1..=options`.
    IndexOutOfRange,
    /// Letter answer past the last option (strict mode only).
    LetterOutOfRange(char),
    /// Neither a number nor a letter.
    UnknownFormat,
}

/// A non-fatal problem with one question. The question is still kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the source text.
    pub line: usize,
    pub prompt: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::IndexOutOfRange => write!(
                f,
                "line {}: invalid answer index for question: {}",
                self.line, self.prompt
            ),
            DiagnosticKind::LetterOutOfRange(letter) => write!(
                f,
                "line {}: answer '{}' names no option for question: {}",
                self.line, letter, self.prompt
            ),
            DiagnosticKind::UnknownFormat => write!(
                f,
                "line {}: invalid answer format for question: {}",
                self.line, self.prompt
            ),
        }
    }
}

/// Questions parsed from one source plus the problems found on the way.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub exam: ExamSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse raw exam text. Never fails: malformed lines are skipped and bad
/// answer fields are kept as [`AnswerKey::Invalid`] with a diagnostic.
pub fn parse(raw: &str, mode: ParseMode) -> Parsed {
    let mut questions = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, line) in raw.lines().enumerate() {
        let line_number = index + 1;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(FIELD_DELIMITER);
        let (Some(prompt), Some(options_field)) = (fields.next(), fields.next()) else {
            debug!(line = line_number, "skipping line without prompt and options");
            continue;
        };
        let answer_field = fields.next().unwrap_or("");

        let options = split_options(options_field);
        let correct_answer = match resolve_answer(answer_field, options.len(), mode) {
            Ok(letter) => AnswerKey::Letter(letter),
            Err(kind) => {
                let diagnostic = Diagnostic {
                    line: line_number,
                    prompt: prompt.to_string(),
                    kind,
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                AnswerKey::Invalid
            }
        };

        questions.push(Question {
            prompt: prompt.to_string(),
            options,
            correct_answer,
        });
    }

    Parsed {
        exam: ExamSet::new(questions),
        diagnostics,
    }
}

fn split_options(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }

    let mut options: Vec<String> = field.split(OPTION_DELIMITER).map(str::to_string).collect();
    // A trailing delimiter terminates the last option rather than opening an empty one.
    if options.last().is_some_and(|last| last.is_empty()) {
        options.pop();
    }
    options
}

/// Map an answer field to a lower-case option label.
fn resolve_answer(field: &str, option_count: usize, mode: ParseMode) -> Result<char, DiagnosticKind> {
    let field = field.trim_matches(|c| c == ' ' || c == '\t');
    let Some(first) = field.chars().next() else {
        return Err(DiagnosticKind::UnknownFormat);
    };

    if first.is_ascii_digit() {
        let digits_end = field
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(field.len());
        return field[..digits_end]
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .filter(|index| *index < option_count)
            .and_then(option_label)
            .ok_or(DiagnosticKind::IndexOutOfRange);
    }

    if first.is_ascii_alphabetic() {
        let letter = first.to_ascii_lowercase();
        if mode == ParseMode::Strict {
            let index = usize::from(letter as u8 - b'a');
            if index >= option_count {
                return Err(DiagnosticKind::LetterOutOfRange(letter));
            }
        }
        return Ok(letter);
    }

    Err(DiagnosticKind::UnknownFormat)
}
