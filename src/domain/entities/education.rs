use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub start: String,
    pub end: String,
    pub location: Option<String>,
    /// Free-text detail lines; a line may carry its own leading "•" marker,
    /// which is stripped before display.
    pub details: Option<Vec<String>>,
    /// Documentation images shown as a gallery wired to the modal viewer.
    pub images: Option<Vec<String>>,
    pub thesis_link: Option<String>,
}
