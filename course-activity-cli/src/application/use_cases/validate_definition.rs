use crate::infrastructure::error::{CliError, Result};
use crate::infrastructure::DefinitionSource;
use course_activity_core::{Activity, ActivityDocument, ActivityError};
use serde::Serialize;
use std::fmt;

/// Outcome of checking one definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub items: usize,
    pub questions: usize,
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(
                f,
                "{}: ok ({} items, {} questions)",
                self.source, self.items, self.questions
            );
        }

        write!(f, "{}: {} issue(s)", self.source, self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

/// Read a definition and report every authoring issue it has
///
/// Syntax errors in the file still fail outright; only structural problems
/// end up in the report.
pub fn validate_definition(source: &DefinitionSource) -> Result<ValidationReport> {
    let document = source.read_document()?;
    validate_document(source.path().display().to_string(), document)
}

pub fn validate_document(
    source: impl Into<String>,
    document: ActivityDocument,
) -> Result<ValidationReport> {
    let items = document.items.len();
    let questions = document
        .items
        .iter()
        .filter(|item| item.question_kind().is_some())
        .count();

    let issues = match Activity::from_document(document) {
        Ok(_) => Vec::new(),
        Err(ActivityError::MalformedActivityDefinition { issues }) => {
            issues.iter().map(ToString::to_string).collect()
        }
        Err(e) => return Err(CliError::from(e)),
    };

    let report = ValidationReport {
        source: source.into(),
        items,
        questions,
        issues,
    };
    tracing::info!(
        source = %report.source,
        issues = report.issues.len(),
        "Validated definition"
    );
    Ok(report)
}
