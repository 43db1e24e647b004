use course_activity_core::activities::color_filtering;
use course_activity_core::{
    Activity, ActivityBuilder, ActivityError, ChoiceSelection, IssueKind, Submission,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

#[test]
fn test_lesson_loads_and_evaluates_with_tracing() {
    init_test_tracing();

    let activity = color_filtering::activity().unwrap();
    let response = activity
        .respond(1, &Submission::Choice(ChoiceSelection::label("D")))
        .unwrap();

    assert_eq!(response.is_correct(), Some(true));
    tracing::info!("Lesson {} evaluated", color_filtering::REFERENCE);
}

#[test]
fn test_rejected_definition_with_tracing() {
    init_test_tracing();

    let err = ActivityBuilder::new()
        .markup("<b>Which one?")
        .multiple_choice([("A", false, "No"), ("B", false, "No")])
        .free_text("white?", "iy", "Right", "Wrong", "Help")
        .markup("Done")
        .build()
        .unwrap_err();

    let kinds: Vec<_> = err.issues().iter().map(|issue| issue.kind.clone()).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(kinds[0], IssueKind::UnbalancedMarkup(_)));
    assert_eq!(kinds[1], IssueKind::NoCorrectChoice);
    assert_eq!(kinds[2], IssueKind::UnsupportedFlag { flag: 'y' });
}

#[test]
fn test_activity_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Activity>();

    let activity = std::sync::Arc::new(color_filtering::activity().unwrap());
    let handles: Vec<_> = ["White", "blue", "whit"]
        .into_iter()
        .map(|answer| {
            let activity = activity.clone();
            std::thread::spawn(move || {
                activity
                    .respond(4, &Submission::Text(answer.to_string()))
                    .map(|response| response.is_correct())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![Ok(Some(true)), Ok(Some(false)), Ok(Some(true))]);
}

#[test]
fn test_malformed_json_reports_structure() {
    let json = r#"{ "items": [
        { "kind": "markup", "html": "Type a color" },
        { "kind": "freeText", "pattern": "white(", "patternFlags": "i",
          "correct": "c", "incorrect": "x", "help": "h" }
    ] }"#;

    match Activity::from_json(json) {
        Err(ActivityError::MalformedActivityDefinition { issues }) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].index, 1);
        }
        other => panic!("Expected MalformedActivityDefinition, got {:?}", other),
    }
}
