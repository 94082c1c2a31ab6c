use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{self, Resource, DEFAULT_CATEGORY};

/// An accomplishment entry; carries only the generic record fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accomplishment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub date: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccomplishmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
}

impl Resource for Accomplishment {
    type Patch = AccomplishmentPatch;

    const KIND: &'static str = "accomplishment";
    const LABEL: &'static str = "Accomplishment";

    fn id(&self) -> i64 {
        self.id
    }

    fn validate(patch: &AccomplishmentPatch) -> Result<(), ModelError> {
        record::require_title_and_description(&patch.title, &patch.description)
    }

    fn create(id: i64, patch: AccomplishmentPatch) -> Self {
        Accomplishment {
            id,
            title: patch.title.unwrap_or_default(),
            description: patch.description.unwrap_or_default(),
            category: patch.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image_url: patch.image_url.unwrap_or_default(),
            date: patch.date.unwrap_or_else(record::current_month),
        }
    }

    fn merge(&mut self, patch: AccomplishmentPatch) {
        if let Some(v) = patch.title { self.title = v; }
        if let Some(v) = patch.description { self.description = v; }
        if let Some(v) = patch.category { self.category = v; }
        if let Some(v) = patch.image_url { self.image_url = v; }
        if let Some(v) = patch.date { self.date = v; }
    }

    fn sample() -> Self {
        Accomplishment {
            id: 1,
            title: "Hackathon Winner - TechCrunch Disrupt".into(),
            description: "First place winner for developing an innovative AI-powered code review tool.".into(),
            category: "Competition".into(),
            image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&q=80".into(),
            date: "2024-09".into(),
        }
    }
}
