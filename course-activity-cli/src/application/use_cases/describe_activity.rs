use course_activity_core::{Activity, ActivityItem};
use serde::Serialize;
use std::fmt;

const PREVIEW_LEN: usize = 60;

/// One line of an activity overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub index: usize,
    pub kind: String,
    pub detail: String,
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {:<16} {}", self.index, self.kind, self.detail)
    }
}

/// List every item with its position and kind
pub fn describe_activity(activity: &Activity) -> Vec<ItemSummary> {
    activity
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let kind = item
                .question_kind()
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "markup".to_string());
            let detail = match item {
                ActivityItem::Markup(html) => preview(html),
                ActivityItem::MultipleChoice(q) => q
                    .choices()
                    .iter()
                    .map(|choice| {
                        if choice.correct {
                            format!("{}*", choice.label)
                        } else {
                            choice.label.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                ActivityItem::FreeText(q) => q.pattern().to_string(),
            };
            ItemSummary {
                index,
                kind,
                detail,
            }
        })
        .collect()
}

/// First characters of a fragment, on one line
fn preview(html: &str) -> String {
    let flat = html.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
