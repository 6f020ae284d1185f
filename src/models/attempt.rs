use super::AnswerKey;

/// A wrongly answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    /// The question prompt, exactly as loaded.
    pub prompt: String,
    /// What the user typed, lower-cased.
    pub given: char,
    pub expected: AnswerKey,
}

/// The result of one pass through an exam.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attempt {
    pub score: usize,
    /// Number of questions answered.
    pub total: usize,
    /// In the order they were made.
    pub mistakes: Vec<Mistake>,
}

impl Attempt {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

/// Performance band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 75.0 {
            Grade::Good
        } else if percentage >= 50.0 {
            Grade::NeedsImprovement
        } else {
            Grade::Poor
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent job!",
            Grade::Good => "Good work!",
            Grade::NeedsImprovement => "Needs improvement.",
            Grade::Poor => "Better luck next time!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(score: usize, total: usize) -> Attempt {
        Attempt {
            score,
            total,
            mistakes: Vec::new(),
        }
    }

    #[test]
    fn grade_bands() {
        assert_eq!(attempt(9, 10).grade(), Grade::Excellent);
        assert_eq!(attempt(3, 4).grade(), Grade::Good);
        assert_eq!(attempt(7, 10).grade(), Grade::NeedsImprovement);
        assert_eq!(attempt(1, 2).grade(), Grade::NeedsImprovement);
        assert_eq!(attempt(4, 10).grade(), Grade::Poor);
    }

    #[test]
    fn empty_attempt_scores_zero_percent() {
        assert_eq!(attempt(0, 0).percentage(), 0.0);
        assert_eq!(attempt(0, 0).grade(), Grade::Poor);
    }
}
