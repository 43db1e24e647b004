pub mod use_cases;

pub use use_cases::{
    convert_legacy, default_output, describe_activity, evaluate_submission, lesson_json,
    schema_json, validate_definition, validate_document, EvaluationReport, ItemSummary,
    ValidationReport,
};
