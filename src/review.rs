//! Mistake report formatting.

use crate::models::{Attempt, Mistake};

pub const NO_MISTAKES: &str = "No incorrect answers. Well done!";
pub const REPORT_HEADER: &str = "--- Incorrect Answers ---";

/// Report lines for a list of mistakes, in the order they were made.
pub fn report_lines(mistakes: &[Mistake]) -> Vec<String> {
    if mistakes.is_empty() {
        return vec![NO_MISTAKES.to_string()];
    }

    let mut lines = Vec::with_capacity(mistakes.len() * 4 + 1);
    lines.push(REPORT_HEADER.to_string());
    for (index, mistake) in mistakes.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {}", index + 1, mistake.prompt));
        lines.push(format!("   Your answer: {}", mistake.given));
        lines.push(format!("   Correct answer: {}", mistake.expected));
    }
    lines
}

pub fn format_mistakes(mistakes: &[Mistake]) -> String {
    report_lines(mistakes).join("\n")
}

/// Final score block shown when an attempt ends.
pub fn summary_lines(attempt: &Attempt) -> Vec<String> {
    vec![
        "--- Exam Finished ---".to_string(),
        format!("Your final score: {}/{}", attempt.score, attempt.total),
        format!("Your performance: {:.2}%", attempt.percentage()),
        attempt.grade().message().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerKey;

    #[test]
    fn summary_shows_score_percentage_and_grade() {
        let attempt = Attempt {
            score: 2,
            total: 3,
            mistakes: Vec::new(),
        };
        assert_eq!(
            summary_lines(&attempt),
            vec![
                "--- Exam Finished ---",
                "Your final score: 2/3",
                "Your performance: 66.67%",
                "Needs improvement.",
            ]
        );
    }

    #[test]
    fn no_mistakes_is_a_single_line() {
        assert_eq!(format_mistakes(&[]), NO_MISTAKES);
    }

    #[test]
    fn mistakes_are_numbered_in_order() {
        let mistakes = vec![
            Mistake {
                prompt: "2+2=?".to_string(),
                given: 'z',
                expected: AnswerKey::Letter('b'),
            },
            Mistake {
                prompt: "Broken".to_string(),
                given: 'a',
                expected: AnswerKey::Invalid,
            },
        ];

        assert_eq!(
            format_mistakes(&mistakes),
            "--- Incorrect Answers ---\n\
             \n\
             1. 2+2=?\n   Your answer: z\n   Correct answer: b\n\
             \n\
             2. Broken\n   Your answer: a\n   Correct answer: (invalid)"
        );
    }
}
