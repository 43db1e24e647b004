use course_activity_core::activities::color_filtering;
use course_activity_core::{Activity, ActivityItem};
use course_activity_tests::ActivityWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

// ===== Given Steps =====

#[given("the color filtering lesson is loaded")]
async fn lesson_loaded(world: &mut ActivityWorld) {
    world.loaded(color_filtering::activity());
}

#[given(expr = "markup {string}")]
async fn markup(world: &mut ActivityWorld, html: String) {
    world.builder = std::mem::take(&mut world.builder).markup(html);
}

#[given("a multiple-choice question with choices:")]
async fn multiple_choice(world: &mut ActivityWorld, step: &Step) {
    let table = step.table.as_ref().expect("Choices table required");
    let choices: Vec<_> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            let correct = match row[1].as_str() {
                "yes" | "true" => true,
                "no" | "false" => false,
                other => panic!("Unknown correctness '{}'", other),
            };
            (row[0].clone(), correct, row[2].clone())
        })
        .collect();

    world.builder = std::mem::take(&mut world.builder).multiple_choice(choices);
}

#[given(expr = "a free-text question matching {string} with flags {string}")]
async fn free_text(world: &mut ActivityWorld, pattern: String, flags: String) {
    world.builder = std::mem::take(&mut world.builder).free_text(
        pattern,
        flags,
        "Correct",
        "Incorrect",
        "Help",
    );
}

// ===== When Steps =====

#[when("the activity is built")]
async fn activity_built(world: &mut ActivityWorld) {
    world.build();
}

#[when("the JSON definition is loaded:")]
async fn json_loaded(world: &mut ActivityWorld, step: &Step) {
    let json = step.docstring.as_ref().expect("JSON docstring required");
    world.loaded(Activity::from_json(json));
}

// ===== Then Steps =====

#[then(expr = "the activity has {int} items")]
async fn item_count(world: &mut ActivityWorld, count: usize) {
    assert_eq!(world.activity().len(), count);
}

#[then(expr = "item {int} is a {word} item")]
async fn item_kind(world: &mut ActivityWorld, index: usize, kind: String) {
    let item = &world.activity().items()[index];
    let actual = item
        .question_kind()
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "markup".to_string());
    assert_eq!(actual, kind, "Item {} has the wrong kind", index);
}

#[then(expr = "option {int} of item {int} is labelled {string}")]
async fn option_label(world: &mut ActivityWorld, option: usize, index: usize, label: String) {
    match &world.activity().items()[index] {
        ActivityItem::MultipleChoice(q) => assert_eq!(q.choices()[option].label, label),
        other => panic!("Item {} is not a multiple-choice question: {:?}", index, other),
    }
}

#[then(expr = "loading fails with {int} issue(s)")]
async fn loading_fails(world: &mut ActivityWorld, count: usize) {
    assert!(world.activity.is_none(), "Activity loaded unexpectedly");
    assert_eq!(
        world.issues.len(),
        count,
        "Unexpected issues: {:?}",
        world.issues
    );
}

#[then(expr = "item {int} is reported with {string}")]
async fn issue_reported(world: &mut ActivityWorld, index: usize, text: String) {
    let found = world
        .issues
        .iter()
        .any(|issue| issue.index == index && issue.kind.to_string().contains(&text));
    assert!(
        found,
        "No issue for item {} mentioning '{}': {:?}",
        index, text, world.issues
    );
}

#[then(expr = "loading fails with an error mentioning {string}")]
async fn loading_error(world: &mut ActivityWorld, text: String) {
    assert!(world.activity.is_none(), "Activity loaded unexpectedly");
    let error = world.last_error.as_deref().expect("No error recorded");
    assert!(error.contains(&text), "Error '{}' does not mention '{}'", error, text);
}

#[then("saving and loading it again gives the same activity")]
async fn round_trip(world: &mut ActivityWorld) {
    let activity = world.activity();
    let json = activity.to_json_pretty().expect("Serialization failed");
    let reloaded = Activity::from_json(&json).expect("Reload failed");

    assert_eq!(&reloaded, activity);
}
