mod convert_legacy;
mod describe_activity;
mod evaluate_submission;
mod export;
mod validate_definition;

pub use convert_legacy::{convert_legacy, default_output};
pub use describe_activity::{describe_activity, ItemSummary};
pub use evaluate_submission::{evaluate_submission, EvaluationReport};
pub use export::{lesson_json, schema_json};
pub use validate_definition::{validate_definition, validate_document, ValidationReport};
