use super::validation::IssueKind;
use crate::traits::{EvaluationError, Outcome, Question, QuestionKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One labelled option of a multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Choice {
    /// Text the student picks, e.g. "D"
    pub label: String,

    /// Whether picking this option answers the question
    pub correct: bool,

    /// Shown after the option is picked
    pub feedback: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, correct: bool, feedback: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            correct,
            feedback: feedback.into(),
        }
    }
}

/// How a student points at a choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSelection {
    /// Matched against labels after trimming whitespace
    Label(String),
    /// Zero-based position in the choice list
    Index(usize),
}

impl ChoiceSelection {
    pub fn label(label: impl Into<String>) -> Self {
        ChoiceSelection::Label(label.into())
    }

    pub fn index(index: usize) -> Self {
        ChoiceSelection::Index(index)
    }
}

impl fmt::Display for ChoiceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceSelection::Label(label) => write!(f, "label '{}'", label),
            ChoiceSelection::Index(index) => write!(f, "index {}", index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceQuestion {
    choices: Vec<Choice>,
}

impl MultipleChoiceQuestion {
    /// Build a question, reporting every structural problem at once
    pub(crate) fn from_choices(choices: Vec<Choice>) -> Result<Self, Vec<IssueKind>> {
        let mut issues = Vec::new();

        if choices.is_empty() {
            issues.push(IssueKind::NoChoices);
        } else if !choices.iter().any(|c| c.correct) {
            issues.push(IssueKind::NoCorrectChoice);
        }

        let mut seen = HashSet::new();
        for choice in &choices {
            let label = choice.label.trim();
            if !seen.insert(label) {
                issues.push(IssueKind::DuplicateChoiceLabel {
                    label: label.to_string(),
                });
            }
        }

        if issues.is_empty() {
            Ok(Self { choices })
        } else {
            Err(issues)
        }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.correct)
    }

    /// Find the choice a selection points at
    pub fn select(&self, selection: &ChoiceSelection) -> Option<&Choice> {
        match selection {
            ChoiceSelection::Index(index) => self.choices.get(*index),
            ChoiceSelection::Label(label) => {
                let label = label.trim();
                self.choices.iter().find(|c| c.label.trim() == label)
            }
        }
    }
}

impl Question for MultipleChoiceQuestion {
    type Submission = ChoiceSelection;

    fn kind(&self) -> QuestionKind {
        QuestionKind::MultipleChoice
    }

    fn evaluate(&self, selection: &ChoiceSelection) -> Result<Outcome<'_>, EvaluationError> {
        let choice = self
            .select(selection)
            .ok_or_else(|| EvaluationError::InvalidSelection {
                selection: selection.to_string(),
            })?;

        Ok(Outcome::new(choice.correct, &choice.feedback))
    }
}
