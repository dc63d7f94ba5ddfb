//! Linear issues, as seen by this crate

use chrono::{DateTime, Utc};

/// A Linear issue, reduced to what the reports need
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    /// The team-scoped key of the issue, e.g. `ABC-123`
    identifier: String,
    title: String,
    /// The web URL of the issue
    url: String,
    /// When the issue was moved to a "done" state, if it ever was
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new<S: ToString, T: ToString, U: ToString>(identifier: S, title: T, url: U, completed_at: Option<DateTime<Utc>>) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            completed_at,
        }
    }

    pub fn identifier(&self) -> &str    { &self.identifier }
    pub fn title(&self) -> &str         { &self.title      }
    pub fn url(&self) -> &str           { &self.url        }
    pub fn completed_at(&self) -> Option<&DateTime<Utc>> { self.completed_at.as_ref() }
}

/// Turn whatever the server sent as a completion date into a timestamp.
///
/// Anything that is not an RFC 3339 string (`null`, a number, garbage text...) is treated as "not completed".
pub fn normalize_completed_at(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => match DateTime::parse_from_rfc3339(text) {
            Ok(date) => Some(date.with_timezone(&Utc)),
            Err(err) => {
                log::warn!("Ignoring unparseable completion date {:?}: {}", text, err);
                None
            },
        },
        other => {
            log::warn!("Ignoring completion date of unexpected type: {}", other);
            None
        },
    }
}
