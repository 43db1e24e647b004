use course_activity_core::{
    Activity, ActivityBuilder, ActivityError, QuestionKind, Response, Submission, ValidationIssue,
};
use cucumber::World;

/// What a player saw after the last submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// `None` for help requests
    pub correct: Option<bool>,
    pub text: String,
}

impl From<Response<'_>> for Feedback {
    fn from(response: Response<'_>) -> Self {
        Self {
            correct: response.is_correct(),
            text: response.feedback().to_string(),
        }
    }
}

#[derive(Debug, Default, World)]
pub struct ActivityWorld {
    /// Definition being authored in the current scenario
    pub builder: ActivityBuilder,

    /// Loaded activity (the system under test)
    pub activity: Option<Activity>,

    /// Legacy script text given by the scenario
    pub script: Option<String>,

    /// Feedback of the last submission
    pub last_feedback: Option<Feedback>,

    /// Issues of the last rejected definition
    pub issues: Vec<ValidationIssue>,

    /// Last error message, from loading or evaluating
    pub last_error: Option<String>,
}

impl ActivityWorld {
    /// Store the result of a load attempt
    pub fn loaded(&mut self, result: Result<Activity, ActivityError>) {
        match result {
            Ok(activity) => {
                self.activity = Some(activity);
                self.issues.clear();
                self.last_error = None;
            }
            Err(e) => {
                self.activity = None;
                self.issues = e.issues().to_vec();
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Build whatever has been authored so far
    pub fn build(&mut self) {
        let result = std::mem::take(&mut self.builder).build();
        self.loaded(result);
    }

    /// Get the loaded activity (panics if loading failed)
    pub fn activity(&self) -> &Activity {
        self.activity.as_ref().unwrap_or_else(|| {
            panic!(
                "No activity loaded: {}",
                self.last_error.as_deref().unwrap_or("nothing was loaded")
            )
        })
    }

    /// Submit to the question at `index` and store the feedback or error
    pub fn submit(&mut self, index: usize, submission: Submission) {
        match self.activity().respond(index, &submission) {
            Ok(response) => {
                self.last_feedback = Some(response.into());
                self.last_error = None;
            }
            Err(e) => {
                self.last_feedback = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Get the last feedback (panics if none)
    pub fn last_feedback(&self) -> &Feedback {
        self.last_feedback.as_ref().unwrap_or_else(|| {
            panic!(
                "No feedback: {}",
                self.last_error.as_deref().unwrap_or("nothing was submitted")
            )
        })
    }

    /// Position of the first question of the given kind
    pub fn question_index(&self, kind: QuestionKind) -> usize {
        self.activity()
            .items()
            .iter()
            .position(|item| item.question_kind() == Some(kind))
            .unwrap_or_else(|| panic!("Activity has no {} question", kind))
    }
}
