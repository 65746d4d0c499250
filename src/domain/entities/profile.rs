use serde::{Deserialize, Serialize};

use super::{education::EducationEntry, experience::ExperienceItem, project::ProjectItem, skill::SkillGroup, timeline::TimelineEntry};

/// The single content record driving the rendered page. Built once from
/// static configuration and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: Option<String>,
    pub summary: String,
    pub email: Option<String>,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub education: Vec<EducationEntry>,
    pub languages: Option<Vec<String>>,
    pub profile_image: Option<String>, // remote URL or /assets path
    pub banner_image: Option<String>,
    pub timeline: Option<Vec<TimelineEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String, // commonly "LinkedIn", "GitHub", ... but free text
    pub href: String,
}
