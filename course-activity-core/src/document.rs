//! Interchange form of an activity
//!
//! This is what travels between authoring tools and the course player. It is
//! plain data: nothing here is validated or compiled. Turn it into an
//! [`Activity`](crate::Activity) to get checked, ready-to-evaluate items.

use crate::domain::Choice;
use crate::traits::QuestionKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityDocument {
    /// Activity title shown by the player
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Items in presentation order
    pub items: Vec<ItemDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemDocument {
    /// Self-contained HTML fragment
    Markup { html: String },

    MultipleChoice { choices: Vec<Choice> },

    FreeText {
        /// Regular expression source, without delimiters
        pattern: String,

        /// Flags as written after the closing delimiter, e.g. "i"
        #[serde(rename = "patternFlags", default)]
        pattern_flags: String,

        /// Feedback for a matching answer
        correct: String,

        /// Feedback for any other answer
        incorrect: String,

        /// Feedback for a help request
        help: String,
    },
}

impl ItemDocument {
    pub fn markup(html: impl Into<String>) -> Self {
        ItemDocument::Markup { html: html.into() }
    }

    pub fn question_kind(&self) -> Option<QuestionKind> {
        match self {
            ItemDocument::Markup { .. } => None,
            ItemDocument::MultipleChoice { .. } => Some(QuestionKind::MultipleChoice),
            ItemDocument::FreeText { .. } => Some(QuestionKind::FreeText),
        }
    }
}

impl ActivityDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// JSON Schema of the interchange format
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ActivityDocument)
    }
}
