use course_activity_core::{ActivityError, EvaluationError, LegacyError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Activity(#[from] ActivityError),

    #[error("Legacy script error: {0}")]
    Legacy(#[from] LegacyError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Definition file not found: {path}")]
    DefinitionNotFound { path: PathBuf },

    #[error("Cannot tell the definition format of {path}; use --format")]
    UnknownFormat { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn definition_not_found(path: PathBuf) -> Self {
        CliError::DefinitionNotFound { path }
    }

    pub fn unknown_format(path: PathBuf) -> Self {
        CliError::UnknownFormat { path }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
