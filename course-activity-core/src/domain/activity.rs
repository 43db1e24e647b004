use super::choice::{ChoiceSelection, MultipleChoiceQuestion};
use super::free_text::{AnswerPattern, FreeTextQuestion};
use super::markup::check_balanced;
use super::validation::{check_context, IssueKind, ValidationIssue};
use crate::document::{ActivityDocument, ItemDocument};
use crate::legacy::LegacyError;
use crate::traits::{EvaluationError, Outcome, Question, QuestionKind};
use serde::{Deserialize, Serialize};

/// One presentation block of an activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityItem {
    /// HTML fragment rendered verbatim
    Markup(String),
    MultipleChoice(MultipleChoiceQuestion),
    FreeText(FreeTextQuestion),
}

impl ActivityItem {
    pub fn question_kind(&self) -> Option<QuestionKind> {
        match self {
            ActivityItem::Markup(_) => None,
            ActivityItem::MultipleChoice(q) => Some(q.kind()),
            ActivityItem::FreeText(q) => Some(q.kind()),
        }
    }

    pub fn is_question(&self) -> bool {
        self.question_kind().is_some()
    }

    fn to_document(&self) -> ItemDocument {
        match self {
            ActivityItem::Markup(html) => ItemDocument::markup(html.clone()),
            ActivityItem::MultipleChoice(q) => ItemDocument::MultipleChoice {
                choices: q.choices().to_vec(),
            },
            ActivityItem::FreeText(q) => ItemDocument::FreeText {
                pattern: q.pattern().source().to_string(),
                pattern_flags: q.pattern().flags().to_string(),
                correct: q.correct_feedback().to_string(),
                incorrect: q.incorrect_feedback().to_string(),
                help: q.help().to_string(),
            },
        }
    }

    fn from_document(item: ItemDocument) -> Result<Self, Vec<IssueKind>> {
        match item {
            ItemDocument::Markup { html } => {
                check_balanced(&html).map_err(|e| vec![e.into()])?;
                Ok(ActivityItem::Markup(html))
            }
            ItemDocument::MultipleChoice { choices } => {
                MultipleChoiceQuestion::from_choices(choices).map(ActivityItem::MultipleChoice)
            }
            ItemDocument::FreeText {
                pattern,
                pattern_flags,
                correct,
                incorrect,
                help,
            } => {
                let pattern = AnswerPattern::new(pattern, pattern_flags).map_err(|e| vec![e])?;
                Ok(ActivityItem::FreeText(FreeTextQuestion::new(
                    pattern, correct, incorrect, help,
                )))
            }
        }
    }
}

/// What the player hands in for a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A picked option of a multiple-choice question
    Choice(ChoiceSelection),
    /// Typed answer to a free-text question
    Text(String),
    /// Request for the free-text help feedback
    Help,
}

/// Feedback the player should show for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response<'a> {
    Graded(Outcome<'a>),
    Help { feedback: &'a str },
}

impl<'a> Response<'a> {
    pub fn feedback(&self) -> &'a str {
        match *self {
            Response::Graded(outcome) => outcome.feedback,
            Response::Help { feedback } => feedback,
        }
    }

    /// `None` for help requests, which are not graded
    pub fn is_correct(&self) -> Option<bool> {
        match self {
            Response::Graded(outcome) => Some(outcome.is_correct),
            Response::Help { .. } => None,
        }
    }
}

/// A loaded, validated activity
///
/// Items keep the order they were authored in. Once built an activity never
/// changes, so it can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActivityDocument", into = "ActivityDocument")]
pub struct Activity {
    title: Option<String>,
    items: Vec<ActivityItem>,
}

impl Activity {
    /// Validate an interchange document and compile its answer patterns
    ///
    /// Every problem in the document is collected before failing, so authors
    /// see all of them at once.
    pub fn from_document(document: ActivityDocument) -> Result<Self, ActivityError> {
        tracing::debug!(items = document.items.len(), "Loading activity");

        let mut issues = check_context(&document.items);
        let mut items = Vec::with_capacity(document.items.len());

        for (index, item) in document.items.into_iter().enumerate() {
            match ActivityItem::from_document(item) {
                Ok(item) => items.push(item),
                Err(kinds) => {
                    issues.extend(kinds.into_iter().map(|k| ValidationIssue::new(index, k)))
                }
            }
        }

        if !issues.is_empty() {
            issues.sort_by_key(|issue| issue.index);
            for issue in &issues {
                tracing::warn!(index = issue.index, "Invalid activity item: {}", issue.kind);
            }
            return Err(ActivityError::MalformedActivityDefinition { issues });
        }

        Ok(Self {
            title: document.title,
            items,
        })
    }

    pub fn to_document(&self) -> ActivityDocument {
        ActivityDocument {
            title: self.title.clone(),
            items: self.items.iter().map(ActivityItem::to_document).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ActivityError> {
        let document = ActivityDocument::from_json(json)?;
        Self::from_document(document)
    }

    pub fn to_json(&self) -> Result<String, ActivityError> {
        Ok(serde_json::to_string(&self.to_document())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ActivityError> {
        Ok(self.to_document().to_json_pretty()?)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All items in presentation order
    pub fn items(&self) -> &[ActivityItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Evaluate a submission against the question at `index`
    pub fn respond(
        &self,
        index: usize,
        submission: &Submission,
    ) -> Result<Response<'_>, EvaluationError> {
        let item = self.items.get(index).ok_or(EvaluationError::ItemOutOfRange {
            index,
            len: self.items.len(),
        })?;

        let response = match (item, submission) {
            (ActivityItem::Markup(_), _) => return Err(EvaluationError::NotAQuestion { index }),
            (ActivityItem::MultipleChoice(q), Submission::Choice(selection)) => {
                Response::Graded(q.evaluate(selection)?)
            }
            (ActivityItem::FreeText(q), Submission::Text(answer)) => {
                Response::Graded(q.evaluate(answer.as_str())?)
            }
            (ActivityItem::FreeText(q), Submission::Help) => Response::Help {
                feedback: q.help(),
            },
            (ActivityItem::MultipleChoice(q), _) => return Err(mismatch(index, q)),
            (ActivityItem::FreeText(q), _) => return Err(mismatch(index, q)),
        };

        tracing::debug!(index, correct = ?response.is_correct(), "Evaluated submission");
        Ok(response)
    }
}

impl TryFrom<ActivityDocument> for Activity {
    type Error = ActivityError;

    fn try_from(document: ActivityDocument) -> Result<Self, Self::Error> {
        Activity::from_document(document)
    }
}

impl From<Activity> for ActivityDocument {
    fn from(activity: Activity) -> Self {
        activity.to_document()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Malformed activity definition: {}", summarize(.issues))]
    MalformedActivityDefinition { issues: Vec<ValidationIssue> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Legacy script error: {0}")]
    Legacy(#[from] LegacyError),
}

impl ActivityError {
    /// Validation issues, empty for errors that are not about structure
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ActivityError::MalformedActivityDefinition { issues } => issues,
            _ => &[],
        }
    }
}

fn mismatch(index: usize, question: &impl Question) -> EvaluationError {
    EvaluationError::SubmissionMismatch {
        index,
        kind: question.kind(),
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
