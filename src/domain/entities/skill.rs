use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}
