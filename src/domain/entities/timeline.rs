use serde::{Deserialize, Serialize};

/// One card on the experience timeline. The period is free text,
/// conventionally "<start> → <end|Present>"; whether an entry is "current"
/// is a display rule derived from the period string at render time, never
/// stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub period: String,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
}
