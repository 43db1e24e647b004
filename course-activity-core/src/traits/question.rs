use std::fmt;

/// The two kinds of question an activity can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    MultipleChoice,
    FreeText,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "multiple-choice"),
            QuestionKind::FreeText => write!(f, "free-text"),
        }
    }
}

/// Result of evaluating one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub is_correct: bool,
    pub feedback: &'a str,
}

impl<'a> Outcome<'a> {
    pub fn new(is_correct: bool, feedback: &'a str) -> Self {
        Self {
            is_correct,
            feedback,
        }
    }
}

/// Trait implemented by every question an activity can carry
///
/// Evaluation is stateless: the same submission always yields the same outcome.
pub trait Question {
    /// What a student hands in for this question
    type Submission: ?Sized;

    fn kind(&self) -> QuestionKind;

    /// Check a submission and pick the matching feedback
    fn evaluate(&self, submission: &Self::Submission) -> Result<Outcome<'_>, EvaluationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Invalid selection: {selection}")]
    InvalidSelection { selection: String },

    #[error("Item {index} is out of range (activity has {len} items)")]
    ItemOutOfRange { index: usize, len: usize },

    #[error("Item {index} is markup, not a question")]
    NotAQuestion { index: usize },

    #[error("Item {index} is a {kind} question and does not accept this submission")]
    SubmissionMismatch { index: usize, kind: QuestionKind },
}
