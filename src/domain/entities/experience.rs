use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub start: String, // e.g. "Jan 2022"
    pub end: String,   // e.g. "Present" or "Dec 2023"
    pub location: Option<String>,
    pub summary: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}
