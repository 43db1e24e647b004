use super::markup::MarkupError;
use crate::document::ItemDocument;
use crate::traits::QuestionKind;

/// One authoring problem found while loading an activity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("item {index}: {kind}")]
pub struct ValidationIssue {
    /// Position of the offending item
    pub index: usize,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(index: usize, kind: IssueKind) -> Self {
        Self { index, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    #[error("unbalanced markup: {0}")]
    UnbalancedMarkup(#[from] MarkupError),

    #[error("multiple-choice question has no choices")]
    NoChoices,

    #[error("multiple-choice question has no correct choice")]
    NoCorrectChoice,

    #[error("choice label '{label}' is used more than once")]
    DuplicateChoiceLabel { label: String },

    #[error("invalid answer pattern /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unsupported pattern flag '{flag}'")]
    UnsupportedFlag { flag: char },

    #[error("pattern flag '{flag}' is repeated")]
    RepeatedFlag { flag: char },

    #[error("{kind} question has no adjacent markup")]
    MissingContext { kind: QuestionKind },
}

/// Questions get their context from neighbouring markup only, so each one
/// needs a markup item directly before or after it.
pub(crate) fn check_context(items: &[ItemDocument]) -> Vec<ValidationIssue> {
    let is_markup = |i: Option<&ItemDocument>| matches!(i, Some(ItemDocument::Markup { .. }));

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let kind = item.question_kind()?;
            let before = index.checked_sub(1).and_then(|i| items.get(i));
            let after = items.get(index + 1);
            if is_markup(before) || is_markup(after) {
                None
            } else {
                Some(ValidationIssue::new(index, IssueKind::MissingContext { kind }))
            }
        })
        .collect()
}
