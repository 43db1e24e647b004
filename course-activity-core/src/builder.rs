use crate::document::{ActivityDocument, ItemDocument};
use crate::domain::{Activity, ActivityError, Choice};

/// Assembles an activity item by item, in presentation order
///
/// Nothing is checked until [`build`](Self::build), which runs the same
/// validation as loading a document.
#[derive(Debug, Clone, Default)]
pub struct ActivityBuilder {
    document: ActivityDocument,
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    pub fn markup(mut self, html: impl Into<String>) -> Self {
        self.document.items.push(ItemDocument::markup(html));
        self
    }

    /// Add a multiple-choice question from `(label, correct, feedback)` triples
    pub fn multiple_choice<I, L, F>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = (L, bool, F)>,
        L: Into<String>,
        F: Into<String>,
    {
        let choices = choices
            .into_iter()
            .map(|(label, correct, feedback)| Choice::new(label, correct, feedback))
            .collect();
        self.document
            .items
            .push(ItemDocument::MultipleChoice { choices });
        self
    }

    /// Add a free-text question; `flags` uses the `/source/flags` letters
    pub fn free_text(
        mut self,
        pattern: impl Into<String>,
        flags: impl Into<String>,
        correct: impl Into<String>,
        incorrect: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        self.document.items.push(ItemDocument::FreeText {
            pattern: pattern.into(),
            pattern_flags: flags.into(),
            correct: correct.into(),
            incorrect: incorrect.into(),
            help: help.into(),
        });
        self
    }

    pub fn build(self) -> Result<Activity, ActivityError> {
        Activity::from_document(self.document)
    }
}
