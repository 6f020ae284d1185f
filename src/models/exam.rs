use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::Question;

/// The questions loaded from one exam file, in file order until scrambled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamSet {
    questions: Vec<Question>,
}

impl ExamSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Shuffle question order with fresh entropy.
    pub fn scramble(&mut self) {
        self.scramble_with(&mut rand::rng());
    }

    /// Shuffle question order reproducibly.
    pub fn scramble_seeded(&mut self, seed: u64) {
        self.scramble_with(&mut StdRng::seed_from_u64(seed));
    }

    /// Fisher-Yates over the question order; question contents are untouched.
    pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.as_mut_slice().shuffle(rng);
    }
}

impl From<Vec<Question>> for ExamSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
