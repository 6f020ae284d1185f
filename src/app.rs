use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{ParseMode, ScrambleChoice};
use crate::data::{display_name, load_exam, Diagnostic, Parsed};
use crate::models::{AppState, Attempt, ExamSet, Question};
use crate::session::{Outcome, Session};

/// How the full-screen front-end ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The user quit.
    Quit,
    /// The flow cannot continue, e.g. the chosen exam failed to load.
    Failed(String),
}

pub struct App {
    pub state: AppState,
    parse_mode: ParseMode,
    scramble: ScrambleChoice,
    exams: Vec<PathBuf>,
    selected_exam: usize,
    exam_name: String,
    exam: ExamSet,
    diagnostics: Vec<Diagnostic>,
    session: Option<Session>,
    feedback: Option<Outcome>,
    attempt: Attempt,
    review_scroll: usize,
    exit: Option<Exit>,
}

impl App {
    fn empty(parse_mode: ParseMode, scramble: ScrambleChoice) -> Self {
        Self {
            state: AppState::Picker,
            parse_mode,
            scramble,
            exams: Vec::new(),
            selected_exam: 0,
            exam_name: String::new(),
            exam: ExamSet::default(),
            diagnostics: Vec::new(),
            session: None,
            feedback: None,
            attempt: Attempt::default(),
            review_scroll: 0,
            exit: None,
        }
    }

    /// Start at the exam picker.
    pub fn with_picker(exams: Vec<PathBuf>, parse_mode: ParseMode, scramble: ScrambleChoice) -> Self {
        Self {
            exams,
            ..Self::empty(parse_mode, scramble)
        }
    }

    /// Start with an exam that is already loaded.
    pub fn with_exam(name: impl Into<String>, parsed: Parsed, scramble: ScrambleChoice) -> Self {
        let mut app = Self::empty(ParseMode::default(), scramble);
        app.exam_loaded(name.into(), parsed);
        app
    }

    pub fn exit(&self) -> Option<&Exit> {
        self.exit.as_ref()
    }

    pub fn quit(&mut self) {
        self.exit = Some(Exit::Quit);
    }

    // Picker

    pub fn exams(&self) -> &[PathBuf] {
        &self.exams
    }

    pub fn selected_exam(&self) -> usize {
        self.selected_exam
    }

    pub fn can_pick_another(&self) -> bool {
        !self.exams.is_empty()
    }

    pub fn select_next_exam(&mut self) {
        if !self.exams.is_empty() {
            self.selected_exam = (self.selected_exam + 1) % self.exams.len();
        }
    }

    pub fn select_previous_exam(&mut self) {
        if !self.exams.is_empty() {
            self.selected_exam = (self.selected_exam + self.exams.len() - 1) % self.exams.len();
        }
    }

    /// Select by 1-based number, as typed on the keyboard.
    pub fn select_exam_number(&mut self, number: usize) {
        if (1..=self.exams.len()).contains(&number) {
            self.selected_exam = number - 1;
        }
    }

    pub fn open_selected_exam(&mut self) {
        let Some(path) = self.exams.get(self.selected_exam).cloned() else {
            return;
        };

        match load_exam(&path, self.parse_mode) {
            Ok(parsed) => self.exam_loaded(display_name(&path), parsed),
            Err(err) => {
                warn!(error = %err, "exam load failed");
                self.exit = Some(Exit::Failed(format!("Failed to load questions: {}", err)));
            }
        }
    }

    pub fn pick_another(&mut self) {
        if self.can_pick_another() {
            self.session = None;
            self.state = AppState::Picker;
        }
    }

    // Loaded exam

    fn exam_loaded(&mut self, name: String, parsed: Parsed) {
        info!(exam = %name, questions = parsed.exam.len(), "exam ready");
        self.exam_name = name;
        self.exam = parsed.exam;
        self.diagnostics = parsed.diagnostics;

        match self.scramble {
            ScrambleChoice::Ask => self.state = AppState::ScramblePrompt,
            ScrambleChoice::Never => self.start_exam(),
            ScrambleChoice::Always { seed } => {
                self.scramble_exam(seed);
                self.start_exam();
            }
        }
    }

    fn scramble_exam(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => self.exam.scramble_seeded(seed),
            None => self.exam.scramble(),
        }
    }

    pub fn exam_name(&self) -> &str {
        &self.exam_name
    }

    pub fn exam(&self) -> &ExamSet {
        &self.exam
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn answer_scramble(&mut self, scramble: bool) {
        if scramble {
            self.scramble_exam(None);
        }
        self.start_exam();
    }

    // Quiz

    /// Begin a fresh attempt over the loaded exam, keeping its order.
    pub fn start_exam(&mut self) {
        self.session = Some(Session::new(self.exam.clone()));
        self.feedback = None;
        self.attempt = Attempt::default();
        self.review_scroll = 0;
        self.state = AppState::Quiz;
    }

    /// The question on screen: the one just answered while its feedback is
    /// showing, otherwise the one waiting for an answer.
    pub fn displayed_question(&self) -> Option<&Question> {
        let session = self.session.as_ref()?;
        match self.feedback {
            Some(_) => session.answered().checked_sub(1).and_then(|i| session.exam().get(i)),
            None => session.current(),
        }
    }

    /// 1-based number of the question on screen.
    pub fn current_question_number(&self) -> usize {
        match (&self.session, self.feedback) {
            (Some(session), Some(_)) => session.answered(),
            (Some(session), None) => session.answered() + 1,
            (None, _) => 0,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.exam.len()
    }

    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, Session::score)
    }

    pub fn answered(&self) -> usize {
        self.session.as_ref().map_or(0, Session::answered)
    }

    pub fn feedback(&self) -> Option<Outcome> {
        self.feedback
    }

    /// A key pressed during the quiz: an answer, or the acknowledgement of
    /// the previous answer's feedback.
    pub fn key_in_quiz(&mut self, key: char) {
        if self.feedback.is_some() {
            self.next_question();
        } else {
            self.submit_answer(key);
        }
    }

    pub fn submit_answer(&mut self, answer: char) {
        if let Some(session) = self.session.as_mut() {
            self.feedback = session.submit(answer);
        }
    }

    pub fn next_question(&mut self) {
        self.feedback = None;
        if self.session.as_ref().is_some_and(Session::is_finished) {
            if let Some(session) = self.session.take() {
                self.attempt = session.into_attempt();
            }
            self.state = AppState::Result;
        }
    }

    // Result and review

    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    pub fn view_mistakes(&mut self) {
        self.review_scroll = 0;
        self.state = AppState::Review;
    }

    pub fn back_to_result(&mut self) {
        self.state = AppState::Result;
    }

    pub fn review_scroll(&self) -> usize {
        self.review_scroll
    }

    pub fn scroll_review_down(&mut self) {
        self.review_scroll = self.review_scroll.saturating_add(1);
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.start_exam();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::data::parse;
    use crate::models::AnswerKey;

    const EXAM: &str = "2+2=?|3;4;5|2\nCapital?|Rome;Paris|b\n";

    fn loaded(scramble: ScrambleChoice) -> App {
        App::with_exam("math.exam", parse(EXAM, ParseMode::Lenient), scramble)
    }

    #[test]
    fn asks_about_scrambling_after_load() {
        let app = loaded(ScrambleChoice::Ask);
        assert_eq!(app.state, AppState::ScramblePrompt);
        assert_eq!(app.exam_name(), "math.exam");
    }

    #[test]
    fn full_pass_reaches_result() {
        let mut app = loaded(ScrambleChoice::Never);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.current_question_number(), 1);

        app.key_in_quiz('B');
        assert_eq!(app.feedback(), Some(Outcome::Correct));
        assert_eq!(app.displayed_question().unwrap().prompt, "2+2=?");
        assert_eq!(app.current_question_number(), 1);
        assert_eq!(app.score(), 1);

        app.key_in_quiz('x');
        assert_eq!(app.feedback(), None);
        assert_eq!(app.current_question_number(), 2);

        app.key_in_quiz('a');
        assert_eq!(
            app.feedback(),
            Some(Outcome::Incorrect {
                given: 'a',
                expected: AnswerKey::Letter('b')
            })
        );
        app.key_in_quiz('\n');

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.attempt().score, 1);
        assert_eq!(app.attempt().total, 2);
        assert_eq!(app.attempt().mistakes.len(), 1);
    }

    #[test]
    fn restart_keeps_order_and_resets_attempt() {
        let mut app = loaded(ScrambleChoice::Always { seed: Some(3) });
        let order = app.exam().clone();
        for key in ['a', ' ', 'a', ' '] {
            app.key_in_quiz(key);
        }
        assert_eq!(app.state, AppState::Result);

        app.restart();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.exam(), &order);
        assert_eq!(app.score(), 0);
        assert_eq!(app.attempt(), &Attempt::default());
    }

    #[test]
    fn picker_loads_selected_exam() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.exam");
        let second = dir.path().join("b.exam");
        fs::write(&first, "q|x;y|1\n").unwrap();
        fs::write(&second, EXAM).unwrap();

        let mut app = App::with_picker(vec![first, second], ParseMode::Lenient, ScrambleChoice::Never);
        app.select_previous_exam();
        assert_eq!(app.selected_exam(), 1);
        app.open_selected_exam();

        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.exam_name(), "b.exam");
        assert_eq!(app.total_questions(), 2);
        assert!(app.can_pick_another());
    }

    #[test]
    fn empty_exam_ends_the_flow() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.exam");
        fs::write(&empty, "").unwrap();

        let mut app = App::with_picker(vec![empty], ParseMode::Lenient, ScrambleChoice::Never);
        app.open_selected_exam();
        assert!(matches!(app.exit(), Some(Exit::Failed(_))));
    }

    #[test]
    fn number_keys_select_within_range() {
        let exams = vec![PathBuf::from("a.exam"), PathBuf::from("b.exam")];
        let mut app = App::with_picker(exams, ParseMode::Lenient, ScrambleChoice::Ask);
        app.select_exam_number(2);
        assert_eq!(app.selected_exam(), 1);
        app.select_exam_number(5);
        assert_eq!(app.selected_exam(), 1);
    }

    #[test]
    fn pick_another_needs_a_picker() {
        let mut app = loaded(ScrambleChoice::Never);
        app.pick_another();
        assert_eq!(app.state, AppState::Quiz);
    }
}
