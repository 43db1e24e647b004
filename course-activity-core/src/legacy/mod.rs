//! Import of legacy activity scripts
//!
//! Older courses describe an activity as a script declaring
//! `var activity = [ ... ];`. Each element is either a markup string or a
//! question object whose kind is given by its `questionType` field. This
//! module turns such a script into an [`ActivityDocument`]; validation then
//! happens exactly as for any other document.

mod parser;

use crate::document::{ActivityDocument, ItemDocument};
use crate::domain::{Activity, ActivityError, Choice};
use parser::{Literal, Node, Parser};
use std::fmt;

/// Line and column in a legacy script, both starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegacyError {
    #[error("syntax error at {position}: {message}")]
    Syntax { position: Position, message: String },

    #[error("unexpected structure at {position}: {message}")]
    Shape { position: Position, message: String },
}

impl LegacyError {
    pub fn position(&self) -> Position {
        match self {
            LegacyError::Syntax { position, .. } | LegacyError::Shape { position, .. } => *position,
        }
    }
}

/// Parse a legacy script into an unvalidated document
pub fn parse_activity_script(source: &str) -> Result<ActivityDocument, LegacyError> {
    let root = Parser::new(source).parse_declaration("activity")?;
    let elements = match root.value {
        Literal::Array(elements) => elements,
        _ => return Err(shape(root.position, "'activity' must be an array")),
    };

    let items = elements
        .into_iter()
        .map(convert_element)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(items = items.len(), "Parsed legacy activity script");
    Ok(ActivityDocument { title: None, items })
}

/// Parse and validate a legacy script
pub fn load_activity_script(source: &str) -> Result<Activity, ActivityError> {
    Activity::from_document(parse_activity_script(source)?)
}

fn convert_element(node: Node) -> Result<ItemDocument, LegacyError> {
    match node.value {
        Literal::Str(html) => Ok(ItemDocument::Markup { html }),
        Literal::Object(fields) => convert_question(Fields::new(node.position, fields)),
        _ => Err(shape(
            node.position,
            "expected a markup string or a question object",
        )),
    }
}

fn convert_question(mut fields: Fields) -> Result<ItemDocument, LegacyError> {
    let question_type = fields.take_string("questionType")?;

    let item = match question_type.as_str() {
        "multiple choice" => {
            let choices = fields
                .take_array("choices")?
                .into_iter()
                .map(convert_choice)
                .collect::<Result<Vec<_>, _>>()?;
            ItemDocument::MultipleChoice { choices }
        }
        "freetext" => {
            let (pattern, pattern_flags) = fields.take_regex("correctAnswerRegex")?;
            ItemDocument::FreeText {
                pattern,
                pattern_flags,
                correct: fields.take_string("correctAnswerOutput")?,
                incorrect: fields.take_string("incorrectAnswerOutput")?,
                help: fields.take_string("showAnswerOutput")?,
            }
        }
        other => {
            return Err(shape(
                fields.position,
                format!("unsupported questionType '{}'", other),
            ))
        }
    };

    for (name, node) in &fields.rest {
        tracing::debug!(
            field = %name,
            line = node.position.line,
            "Ignoring unknown question field"
        );
    }

    Ok(item)
}

fn convert_choice(node: Node) -> Result<Choice, LegacyError> {
    let invalid = || shape(node.position, "a choice must be [label, isCorrect, feedback]");

    let Literal::Array(parts) = &node.value else {
        return Err(invalid());
    };

    match parts.as_slice() {
        [label, correct, feedback] => match (&label.value, &correct.value, &feedback.value) {
            (Literal::Str(label), Literal::Bool(correct), Literal::Str(feedback)) => {
                Ok(Choice::new(label.clone(), *correct, feedback.clone()))
            }
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

/// Fields of a question object, consumed as they are converted
struct Fields {
    position: Position,
    rest: Vec<(String, Node)>,
}

impl Fields {
    fn new(position: Position, rest: Vec<(String, Node)>) -> Self {
        Self { position, rest }
    }

    /// Later duplicates win, as they would when the script runs
    fn take(&mut self, name: &str) -> Result<Node, LegacyError> {
        let index = self
            .rest
            .iter()
            .rposition(|(key, _)| key == name)
            .ok_or_else(|| shape(self.position, format!("missing field '{}'", name)))?;
        Ok(self.rest.remove(index).1)
    }

    fn take_string(&mut self, name: &str) -> Result<String, LegacyError> {
        let node = self.take(name)?;
        match node.value {
            Literal::Str(text) => Ok(text),
            _ => Err(shape(node.position, format!("'{}' must be a string", name))),
        }
    }

    fn take_regex(&mut self, name: &str) -> Result<(String, String), LegacyError> {
        let node = self.take(name)?;
        match node.value {
            Literal::Regex { source, flags } => Ok((source, flags)),
            _ => Err(shape(
                node.position,
                format!("'{}' must be a regular expression", name),
            )),
        }
    }

    fn take_array(&mut self, name: &str) -> Result<Vec<Node>, LegacyError> {
        let node = self.take(name)?;
        match node.value {
            Literal::Array(elements) => Ok(elements),
            _ => Err(shape(node.position, format!("'{}' must be an array", name))),
        }
    }
}

fn shape(position: Position, message: impl Into<String>) -> LegacyError {
    LegacyError::Shape {
        position,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::color_filtering;
    use crate::domain::{ChoiceSelection, Submission};

    const LESSON_SCRIPT: &str = include_str!("../../assets/activity-1.2.js");

    #[test]
    fn test_import_bundled_lesson() {
        let imported = load_activity_script(LESSON_SCRIPT).unwrap();
        let bundled = color_filtering::activity().unwrap();

        assert_eq!(imported, bundled);
    }

    #[test]
    fn test_imported_questions_evaluate() {
        let activity = load_activity_script(LESSON_SCRIPT).unwrap();

        let response = activity
            .respond(1, &Submission::Choice(ChoiceSelection::label("D")))
            .unwrap();
        assert_eq!(response.is_correct(), Some(true));

        let response = activity
            .respond(4, &Submission::Text("White".to_string()))
            .unwrap();
        assert_eq!(response.is_correct(), Some(true));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let document = parse_activity_script(
            "var activity = [ 'Q', { questionType: 'multiple choice', \
             choices: [['A', true, 'Yes']], hint: 'ignored' } ];",
        )
        .unwrap();

        assert_eq!(
            document.items[1],
            ItemDocument::MultipleChoice {
                choices: vec![Choice::new("A", true, "Yes")]
            }
        );
    }

    #[test]
    fn test_unsupported_question_type() {
        let err = parse_activity_script(
            "var activity = [\n  { questionType: 'multiple choice group' }\n];",
        )
        .unwrap_err();

        assert_eq!(err.position(), Position { line: 2, column: 3 });
        assert!(err.to_string().contains("multiple choice group"));
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let err = parse_activity_script(
            "var activity = [{ questionType: 'freetext', correctAnswerRegex: 'white' }];",
        )
        .unwrap_err();
        assert!(err.to_string().contains("'correctAnswerRegex' must be a regular expression"));

        let err = parse_activity_script(
            "var activity = [{ questionType: 'freetext', correctAnswerRegex: /w/ }];",
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field 'correctAnswerOutput'"));

        let err = parse_activity_script(
            "var activity = [{ questionType: 'multiple choice', choices: [['A', 'yes', 'x']] }];",
        )
        .unwrap_err();
        assert!(matches!(err, LegacyError::Shape { .. }));
    }

    #[test]
    fn test_non_array_activity() {
        let err = parse_activity_script("var activity = 'text';").unwrap_err();
        assert!(matches!(err, LegacyError::Shape { .. }));
    }

    #[test]
    fn test_validation_still_applies() {
        let result = load_activity_script(
            "var activity = [ 'Q', { questionType: 'multiple choice', \
             choices: [['A', false, 'No']] } ];",
        );

        assert!(matches!(
            result,
            Err(ActivityError::MalformedActivityDefinition { .. })
        ));
    }
}
