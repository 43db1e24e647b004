use crate::infrastructure::error::Result;
use course_activity_core::{Activity, Submission};
use serde::Serialize;
use std::fmt;

/// What the student would see after handing in a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub item: usize,
    /// `None` for help requests
    pub correct: Option<bool>,
    pub feedback: String,
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.correct {
            Some(true) => write!(f, "[correct] {}", self.feedback),
            Some(false) => write!(f, "[incorrect] {}", self.feedback),
            None => write!(f, "[help] {}", self.feedback),
        }
    }
}

pub fn evaluate_submission(
    activity: &Activity,
    item: usize,
    submission: &Submission,
) -> Result<EvaluationReport> {
    let response = activity.respond(item, submission)?;

    Ok(EvaluationReport {
        item,
        correct: response.is_correct(),
        feedback: response.feedback().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::CliError;
    use course_activity_core::activities::color_filtering;
    use course_activity_core::{ChoiceSelection, EvaluationError};

    #[test]
    fn test_choice_by_label_and_index() {
        let activity = color_filtering::activity().unwrap();

        let by_label = evaluate_submission(
            &activity,
            1,
            &Submission::Choice(ChoiceSelection::label("D")),
        )
        .unwrap();
        let by_index = evaluate_submission(
            &activity,
            1,
            &Submission::Choice(ChoiceSelection::index(3)),
        )
        .unwrap();

        assert_eq!(by_label, by_index);
        assert_eq!(by_label.correct, Some(true));
        assert!(by_label.to_string().starts_with("[correct] Correct!"));
    }

    #[test]
    fn test_free_text_and_help() {
        let activity = color_filtering::activity().unwrap();

        let report =
            evaluate_submission(&activity, 4, &Submission::Text("blue".to_string())).unwrap();
        assert_eq!(report.correct, Some(false));
        assert!(report.to_string().starts_with("[incorrect] Try again."));

        let report = evaluate_submission(&activity, 4, &Submission::Help).unwrap();
        assert_eq!(report.correct, None);
        assert!(report.to_string().starts_with("[help] Our search expert says"));
    }

    #[test]
    fn test_markup_item_is_rejected() {
        let activity = color_filtering::activity().unwrap();

        let result = evaluate_submission(&activity, 0, &Submission::Help);
        assert!(matches!(
            result,
            Err(CliError::Evaluation(EvaluationError::NotAQuestion { index: 0 }))
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let report = EvaluationReport {
            item: 4,
            correct: Some(true),
            feedback: "Yes".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "item": 4, "correct": true, "feedback": "Yes" })
        );
    }
}
