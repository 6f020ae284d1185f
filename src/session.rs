//! One pass through an exam.
//!
//! [`Session`] is the state machine shared by both front-ends: it holds the
//! current question, takes one answer at a time and keeps the running score.
//! [`run`] drives it over a [`Console`].

use std::io;

use tracing::debug;

use crate::console::Console;
use crate::models::{option_label, AnswerKey, Attempt, ExamSet, Mistake, Question};

/// How a single answer was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { given: char, expected: AnswerKey },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

pub struct Session {
    exam: ExamSet,
    index: usize,
    score: usize,
    mistakes: Vec<Mistake>,
}

impl Session {
    pub fn new(exam: ExamSet) -> Self {
        Self {
            exam,
            index: 0,
            score: 0,
            mistakes: Vec::new(),
        }
    }

    pub fn exam(&self) -> &ExamSet {
        &self.exam
    }

    /// The question waiting for an answer, or `None` once finished.
    pub fn current(&self) -> Option<&Question> {
        self.exam.get(self.index)
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.exam.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.exam.len()
    }

    /// Score `answer` against the current question and advance.
    ///
    /// The answer is lower-cased and compared as-is: anything that is not
    /// the stored label counts as wrong. Returns `None` once finished.
    pub fn submit(&mut self, answer: char) -> Option<Outcome> {
        let question = self.exam.get(self.index)?;
        let given = answer.to_ascii_lowercase();

        let outcome = if question.correct_answer.matches(given) {
            self.score += 1;
            Outcome::Correct
        } else {
            self.mistakes.push(Mistake {
                prompt: question.prompt.clone(),
                given,
                expected: question.correct_answer,
            });
            Outcome::Incorrect {
                given,
                expected: question.correct_answer,
            }
        };

        self.index += 1;
        debug!(
            question = self.index,
            total = self.exam.len(),
            score = self.score,
            correct = outcome.is_correct(),
            "answer scored"
        );
        Some(outcome)
    }

    /// Result so far.
    pub fn attempt(&self) -> Attempt {
        Attempt {
            score: self.score,
            total: self.index,
            mistakes: self.mistakes.clone(),
        }
    }

    pub fn into_attempt(self) -> Attempt {
        Attempt {
            score: self.score,
            total: self.index,
            mistakes: self.mistakes,
        }
    }
}

/// "Your answer (a/b/c): " for the given number of options.
pub fn answer_prompt(option_count: usize) -> String {
    let labels: Vec<String> = (0..option_count)
        .filter_map(option_label)
        .map(String::from)
        .collect();
    if labels.is_empty() {
        "Your answer: ".to_string()
    } else {
        format!("Your answer ({}): ", labels.join("/"))
    }
}

/// Feedback line for one scored answer.
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Correct => "Correct!".to_string(),
        Outcome::Incorrect { expected, .. } => {
            format!("Wrong! The correct answer was: {}", expected)
        }
    }
}

/// Run a whole attempt over a line console.
pub fn run<C: Console + ?Sized>(exam: &ExamSet, console: &mut C) -> io::Result<Attempt> {
    let mut session = Session::new(exam.clone());
    let total = session.total();

    while let Some(question) = session.current() {
        let number = session.answered() + 1;

        console.clear()?;
        console.show("")?;
        console.show(&format!("Question {}/{}: {}", number, total, question.prompt))?;
        for (label, option) in question.labeled_options() {
            console.show(&format!("  {}. {}", label, option))?;
        }

        let prompt = answer_prompt(question.options.len());
        let answer = console.read_answer(&prompt)?;
        let Some(outcome) = session.submit(answer) else {
            break;
        };

        console.show(&outcome_message(&outcome))?;
        console.show(&format!("Current Score: {}/{}", session.score(), session.answered()))?;
        console.pause("\nPress Enter to continue...")?;
    }

    Ok(session.into_attempt())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::config::ParseMode;
    use crate::console::{AnswerSource, DisplaySink};
    use crate::data::parse;

    /// Console fed from a fixed list of keystrokes.
    #[derive(Default)]
    struct ScriptedConsole {
        answers: VecDeque<char>,
        lines: Vec<String>,
        pauses: usize,
    }

    impl ScriptedConsole {
        fn new(answers: &str) -> Self {
            Self {
                answers: answers.chars().collect(),
                ..Default::default()
            }
        }
    }

    impl DisplaySink for ScriptedConsole {
        fn show(&mut self, line: &str) -> io::Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }
    }

    impl AnswerSource for ScriptedConsole {
        fn read_answer(&mut self, _prompt: &str) -> io::Result<char> {
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn pause(&mut self, _prompt: &str) -> io::Result<()> {
            self.pauses += 1;
            Ok(())
        }
    }

    fn exam(raw: &str) -> ExamSet {
        parse(raw, ParseMode::Lenient).exam
    }

    #[test]
    fn example_answers_are_case_insensitive() {
        for answer in ['b', 'B'] {
            let mut session = Session::new(exam("2+2=?|3;4;5|2"));
            assert_eq!(session.submit(answer), Some(Outcome::Correct));
            assert_eq!(session.score(), 1);
            assert!(session.is_finished());
        }
    }

    #[test]
    fn wrong_answer_records_mistake() {
        let mut session = Session::new(exam("2+2=?|3;4;5|2"));
        assert_eq!(
            session.submit('z'),
            Some(Outcome::Incorrect {
                given: 'z',
                expected: AnswerKey::Letter('b')
            })
        );

        let attempt = session.into_attempt();
        assert_eq!(attempt.score, 0);
        assert_eq!(attempt.total, 1);
        assert_eq!(
            attempt.mistakes,
            vec![Mistake {
                prompt: "2+2=?".to_string(),
                given: 'z',
                expected: AnswerKey::Letter('b'),
            }]
        );
    }

    #[test]
    fn malformed_keystroke_counts_as_wrong() {
        let mut session = Session::new(exam("q|a;b|1"));
        assert!(!session.submit('1').unwrap().is_correct());
    }

    #[test]
    fn invalid_answer_key_is_never_correct() {
        let mut session = Session::new(exam("q|a;b|9"));
        assert_eq!(
            session.submit(' '),
            Some(Outcome::Incorrect {
                given: ' ',
                expected: AnswerKey::Invalid
            })
        );
    }

    #[test]
    fn score_stays_within_answered() {
        let mut session = Session::new(exam("a|x;y|1\nb|x;y|2\nc|x;y|1\nd|x;y|a"));
        for answer in ['a', 'a', 'b', 'a'] {
            session.submit(answer);
            assert!(session.score() <= session.answered());
        }
        assert_eq!(session.score(), 2);
        assert_eq!(session.attempt().mistakes.len(), 2);
    }

    #[test]
    fn submit_after_finish_is_ignored() {
        let mut session = Session::new(exam("q|a;b|1"));
        session.submit('a');
        assert_eq!(session.submit('a'), None);
        assert_eq!(session.answered(), 1);
        assert!(session.current().is_none());
    }

    #[test]
    fn mistakes_keep_prompt_verbatim_and_in_order() {
        let mut session = Session::new(exam(" first |x;y|1\n second\t|x;y|2"));
        session.submit('b');
        session.submit('a');
        let prompts: Vec<_> = session
            .attempt()
            .mistakes
            .into_iter()
            .map(|m| m.prompt)
            .collect();
        assert_eq!(prompts, vec![" first ", " second\t"]);
    }

    #[test]
    fn run_reports_progress_after_every_question() {
        let exam = exam("2+2=?|3;4;5|2\nCapital?|Rome;Paris|b");
        let mut console = ScriptedConsole::new("bz");

        let attempt = run(&exam, &mut console).unwrap();

        assert_eq!(attempt.score, 1);
        assert_eq!(attempt.total, 2);
        assert_eq!(console.pauses, 2);
        assert!(console.lines.contains(&"Question 1/2: 2+2=?".to_string()));
        assert!(console.lines.contains(&"  c. 5".to_string()));
        assert!(console.lines.contains(&"Correct!".to_string()));
        assert!(console.lines.contains(&"Current Score: 1/1".to_string()));
        assert!(console.lines.contains(&"Wrong! The correct answer was: b".to_string()));
        assert!(console.lines.contains(&"Current Score: 1/2".to_string()));
    }

    #[test]
    fn run_propagates_closed_input() {
        let exam = exam("q|a;b|1\nr|a;b|1");
        let mut console = ScriptedConsole::new("a");
        let err = run(&exam, &mut console).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn answer_prompt_lists_labels() {
        assert_eq!(answer_prompt(3), "Your answer (a/b/c): ");
        assert_eq!(answer_prompt(0), "Your answer: ");
    }
}
