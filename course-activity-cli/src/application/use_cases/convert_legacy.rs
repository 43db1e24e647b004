use crate::infrastructure::error::Result;
use course_activity_core::{load_activity_script, ActivityDocument, ActivityRef};
use std::path::{Path, PathBuf};

/// Turn a legacy script into interchange JSON
///
/// The script is fully validated first, so the JSON written is always loadable.
pub fn convert_legacy(script: &str, title: Option<String>) -> Result<String> {
    let activity = load_activity_script(script)?;
    let mut document = ActivityDocument::from(activity);
    document.title = title;

    tracing::debug!(items = document.items.len(), "Converted legacy script");
    Ok(document.to_json_pretty()?)
}

/// `activity-1.2.js` becomes `activity-1.2.json` next to it
pub fn default_output(input: &Path) -> PathBuf {
    let file_name = ActivityRef::from_file_name(input)
        .map(|reference| reference.file_name("json"))
        .unwrap_or_else(|| {
            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "activity".to_string());
            format!("{}.json", stem)
        });
    input.with_file_name(file_name)
}
