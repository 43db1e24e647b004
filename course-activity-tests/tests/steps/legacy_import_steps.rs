use course_activity_core::activities::color_filtering;
use course_activity_core::load_activity_script;
use course_activity_tests::ActivityWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

const LESSON_SCRIPT: &str = include_str!("../../../course-activity-core/assets/activity-1.2.js");

// ===== Given Steps =====

#[given("the legacy script:")]
async fn legacy_script(world: &mut ActivityWorld, step: &Step) {
    let script = step.docstring.as_ref().expect("Script docstring required");
    world.script = Some(script.trim_start_matches('\n').to_string());
}

#[given("the bundled lesson script")]
async fn bundled_script(world: &mut ActivityWorld) {
    world.script = Some(LESSON_SCRIPT.to_string());
}

// ===== When Steps =====

#[when("the script is imported")]
async fn script_imported(world: &mut ActivityWorld) {
    let script = world.script.clone().expect("No script given");
    world.loaded(load_activity_script(&script));
}

// ===== Then Steps =====

#[then("the activity equals the color filtering lesson")]
async fn equals_lesson(world: &mut ActivityWorld) {
    let lesson = color_filtering::activity().expect("Bundled lesson is invalid");
    assert_eq!(world.activity(), &lesson);
}

#[then(expr = "the import fails at line {int}")]
async fn import_fails_at(world: &mut ActivityWorld, line: usize) {
    assert!(world.activity.is_none(), "Script imported unexpectedly");
    let error = world.last_error.as_deref().expect("No error recorded");
    let expected = format!("line {},", line);
    assert!(error.contains(&expected), "Error '{}' is not at line {}", error, line);
}
