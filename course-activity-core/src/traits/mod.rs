pub mod question;

pub use question::{EvaluationError, Outcome, Question, QuestionKind};
