use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::project::{Project, ProjectStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub tags: Json,
    pub status: String,
    pub image_url: String,
    pub demo_url: String,
    pub github_url: String,
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        Project {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            tags: serde_json::from_value(m.tags).unwrap_or_default(),
            status: ProjectStatus::parse(&m.status).unwrap_or_default(),
            image_url: m.image_url,
            demo_url: m.demo_url,
            github_url: m.github_url,
            date: m.date,
        }
    }
}

impl From<Project> for ActiveModel {
    fn from(p: Project) -> Self {
        ActiveModel {
            id: Set(p.id),
            title: Set(p.title),
            description: Set(p.description),
            category: Set(p.category),
            tags: Set(serde_json::to_value(&p.tags).unwrap_or_default()),
            status: Set(p.status.as_str().to_string()),
            image_url: Set(p.image_url),
            demo_url: Set(p.demo_url),
            github_url: Set(p.github_url),
            date: Set(p.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Resource;

    #[test]
    fn active_model_stores_status_as_plain_text() {
        let am: ActiveModel = Project::sample().into();
        assert!(matches!(am.status, sea_orm::ActiveValue::Set(ref s) if s == "completed"));
        assert!(matches!(am.tags, sea_orm::ActiveValue::Set(ref t) if t.is_array()));
    }

    #[test]
    fn row_round_trip_preserves_tags_and_status() {
        let p = Project::sample();
        let row = Model {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            tags: serde_json::to_value(&p.tags).expect("tags to json"),
            status: "completed".into(),
            image_url: p.image_url.clone(),
            demo_url: p.demo_url.clone(),
            github_url: p.github_url.clone(),
            date: p.date.clone(),
        };
        let back: Project = row.into();
        assert_eq!(back, p);
    }

    #[test]
    fn unknown_status_text_falls_back_to_in_progress() {
        let mut p = Project::sample();
        let row = Model {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            tags: serde_json::to_value(&p.tags).expect("tags to json"),
            status: "archived".into(),
            image_url: p.image_url.clone(),
            demo_url: p.demo_url.clone(),
            github_url: p.github_url.clone(),
            date: p.date.clone(),
        };
        let back: Project = row.into();
        p.status = ProjectStatus::InProgress;
        assert_eq!(back, p);
    }
}
