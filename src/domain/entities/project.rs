use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub repo: Option<String>,
    pub image: Option<String>, // remote URL or /assets path
}
