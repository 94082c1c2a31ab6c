use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{self, Resource, DEFAULT_CATEGORY};

/// A portfolio project entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: ProjectStatus,
    pub image_url: String,
    pub demo_url: String,
    pub github_url: String,
    pub date: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    #[default]
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(ProjectStatus::Completed),
            "in-progress" => Some(ProjectStatus::InProgress),
            "planned" => Some(ProjectStatus::Planned),
            _ => None,
        }
    }
}

/// Partial payload for project create/update. Absent fields mean "default"
/// on create and "keep the stored value" on update.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub date: Option<String>,
}

impl Project {
    /// Case-insensitive substring match against title, description and tags.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

impl Resource for Project {
    type Patch = ProjectPatch;

    const KIND: &'static str = "project";
    const LABEL: &'static str = "Project";

    fn id(&self) -> i64 {
        self.id
    }

    fn validate(patch: &ProjectPatch) -> Result<(), ModelError> {
        record::require_title_and_description(&patch.title, &patch.description)
    }

    fn create(id: i64, patch: ProjectPatch) -> Self {
        Project {
            id,
            title: patch.title.unwrap_or_default(),
            description: patch.description.unwrap_or_default(),
            category: patch.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: patch.tags.unwrap_or_default(),
            status: patch.status.unwrap_or_default(),
            image_url: patch.image_url.unwrap_or_default(),
            demo_url: patch.demo_url.unwrap_or_default(),
            github_url: patch.github_url.unwrap_or_default(),
            date: patch.date.unwrap_or_else(record::current_month),
        }
    }

    fn merge(&mut self, patch: ProjectPatch) {
        if let Some(v) = patch.title { self.title = v; }
        if let Some(v) = patch.description { self.description = v; }
        if let Some(v) = patch.category { self.category = v; }
        if let Some(v) = patch.tags { self.tags = v; }
        if let Some(v) = patch.status { self.status = v; }
        if let Some(v) = patch.image_url { self.image_url = v; }
        if let Some(v) = patch.demo_url { self.demo_url = v; }
        if let Some(v) = patch.github_url { self.github_url = v; }
        if let Some(v) = patch.date { self.date = v; }
    }

    fn sample() -> Self {
        Project {
            id: 1,
            title: "E-Commerce Platform".into(),
            description: "A full-stack e-commerce solution with payment integration and inventory management.".into(),
            category: "Web Development".into(),
            tags: vec!["React".into(), "Node.js".into(), "MongoDB".into(), "Stripe".into()],
            status: ProjectStatus::Completed,
            image_url: "https://images.unsplash.com/photo-1661956602116-aa6865609028?w=800&q=80".into(),
            demo_url: "https://demo.example.com".into(),
            github_url: "https://github.com/example".into(),
            date: "2024-10".into(),
        }
    }
}
