use crate::infrastructure::error::Result;
use course_activity_core::activities::color_filtering;
use course_activity_core::ActivityDocument;

/// The bundled lesson as interchange JSON
pub fn lesson_json() -> Result<String> {
    let activity = color_filtering::activity()?;
    tracing::debug!(reference = %color_filtering::REFERENCE, "Exporting bundled lesson");
    Ok(activity.to_json_pretty()?)
}

/// JSON Schema describing the interchange document
pub fn schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&ActivityDocument::json_schema())?)
}
