pub mod activities;
pub mod builder;
pub mod document;
pub mod domain;
pub mod legacy;
pub mod traits;

pub use builder::ActivityBuilder;
pub use document::{ActivityDocument, ItemDocument};
pub use domain::{
    Activity, ActivityError, ActivityItem, ActivityRef, AnswerPattern, Choice, ChoiceSelection,
    FreeTextQuestion, IssueKind, MarkupError, MultipleChoiceQuestion, Response, Submission,
    ValidationIssue,
};
pub use legacy::{load_activity_script, parse_activity_script, LegacyError};
pub use traits::{EvaluationError, Outcome, Question, QuestionKind};
