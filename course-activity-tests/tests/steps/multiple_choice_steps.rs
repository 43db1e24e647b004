use course_activity_core::{ChoiceSelection, QuestionKind, Submission};
use course_activity_tests::ActivityWorld;
use cucumber::{then, when};

// ===== When Steps =====

#[when(expr = "the student picks choice {string}")]
async fn pick_label(world: &mut ActivityWorld, label: String) {
    let index = world.question_index(QuestionKind::MultipleChoice);
    world.submit(index, Submission::Choice(ChoiceSelection::label(label)));
}

#[when(expr = "the student picks choice number {int}")]
async fn pick_position(world: &mut ActivityWorld, position: usize) {
    let index = world.question_index(QuestionKind::MultipleChoice);
    world.submit(index, Submission::Choice(ChoiceSelection::index(position)));
}

#[when("the student asks for help on the multiple-choice question")]
async fn help_on_choice(world: &mut ActivityWorld) {
    let index = world.question_index(QuestionKind::MultipleChoice);
    world.submit(index, Submission::Help);
}

#[when(expr = "the student answers item {int} with choice {string}")]
async fn answer_item(world: &mut ActivityWorld, index: usize, label: String) {
    world.submit(index, Submission::Choice(ChoiceSelection::label(label)));
}

// ===== Then Steps =====

#[then("the answer is correct")]
async fn answer_correct(world: &mut ActivityWorld) {
    assert_eq!(world.last_feedback().correct, Some(true));
}

#[then("the answer is incorrect")]
async fn answer_incorrect(world: &mut ActivityWorld) {
    assert_eq!(world.last_feedback().correct, Some(false));
}

#[then(expr = "the feedback is {string}")]
async fn feedback_is(world: &mut ActivityWorld, text: String) {
    assert_eq!(world.last_feedback().text, text);
}

#[then(expr = "the submission is rejected with {string}")]
async fn submission_rejected(world: &mut ActivityWorld, text: String) {
    assert!(world.last_feedback.is_none(), "Submission was accepted");
    let error = world.last_error.as_deref().expect("No error recorded");
    assert!(error.contains(&text), "Error '{}' does not mention '{}'", error, text);
}
