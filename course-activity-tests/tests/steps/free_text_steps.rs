use course_activity_core::{QuestionKind, Submission};
use course_activity_tests::ActivityWorld;
use cucumber::{then, when};

// ===== When Steps =====

#[when(expr = "the student types {string}")]
async fn types_answer(world: &mut ActivityWorld, answer: String) {
    let index = world.question_index(QuestionKind::FreeText);
    world.submit(index, Submission::Text(answer));
}

#[when("the student asks for help")]
async fn asks_for_help(world: &mut ActivityWorld) {
    let index = world.question_index(QuestionKind::FreeText);
    world.submit(index, Submission::Help);
}

#[when(expr = "the student types {string} into item {int}")]
async fn types_into_item(world: &mut ActivityWorld, answer: String, index: usize) {
    world.submit(index, Submission::Text(answer));
}

// ===== Then Steps =====

#[then("the response is help")]
async fn response_is_help(world: &mut ActivityWorld) {
    assert_eq!(world.last_feedback().correct, None);
}

#[then(expr = "the feedback starts with {string}")]
async fn feedback_starts_with(world: &mut ActivityWorld, prefix: String) {
    let text = &world.last_feedback().text;
    assert!(
        text.starts_with(&prefix),
        "Feedback '{}' does not start with '{}'",
        text,
        prefix
    );
}
