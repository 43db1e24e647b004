pub mod activity;
pub mod activity_ref;
pub mod choice;
pub mod free_text;
pub mod markup;
pub mod validation;

pub use activity::{Activity, ActivityError, ActivityItem, Response, Submission};
pub use activity_ref::{ActivityRef, ActivityRefError};
pub use choice::{Choice, ChoiceSelection, MultipleChoiceQuestion};
pub use free_text::{AnswerPattern, FreeTextQuestion};
pub use markup::{check_balanced, MarkupError};
pub use validation::{IssueKind, ValidationIssue};
