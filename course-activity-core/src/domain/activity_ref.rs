use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Address of an activity inside a course, written `unit.lesson`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivityRef {
    pub unit: u32,
    pub lesson: u32,
}

impl ActivityRef {
    pub const fn new(unit: u32, lesson: u32) -> Self {
        Self { unit, lesson }
    }

    /// Resolve names like `activity-1.2.js` or `assets/js/activity-3.json`
    pub fn from_file_name(path: impl AsRef<Path>) -> Option<Self> {
        let stem = path.as_ref().file_stem()?.to_str()?;
        stem.strip_prefix("activity-")?.parse().ok()
    }

    /// File name for this activity with the given extension
    pub fn file_name(&self, extension: &str) -> String {
        format!("activity-{}.{}.{}", self.unit, self.lesson, extension)
    }
}

impl Default for ActivityRef {
    fn default() -> Self {
        // Players open unit 1, lesson 1 when no address is given
        Self::new(1, 1)
    }
}

impl fmt::Display for ActivityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.unit, self.lesson)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid activity reference '{0}', expected <unit>.<lesson>")]
pub struct ActivityRefError(String);

impl FromStr for ActivityRef {
    type Err = ActivityRefError;

    /// A missing lesson defaults to 1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ActivityRefError(s.to_string());
        let (unit, lesson) = match s.split_once('.') {
            Some((unit, lesson)) => (unit, Some(lesson)),
            None => (s, None),
        };

        let unit = unit.parse().map_err(|_| invalid())?;
        let lesson = match lesson {
            Some(lesson) => lesson.parse().map_err(|_| invalid())?,
            None => 1,
        };
        Ok(Self::new(unit, lesson))
    }
}
