use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::accomplishment::Accomplishment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accomplishment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Accomplishment {
    fn from(m: Model) -> Self {
        Accomplishment {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            image_url: m.image_url,
            date: m.date,
        }
    }
}

impl From<Accomplishment> for ActiveModel {
    fn from(a: Accomplishment) -> Self {
        ActiveModel {
            id: Set(a.id),
            title: Set(a.title),
            description: Set(a.description),
            category: Set(a.category),
            image_url: Set(a.image_url),
            date: Set(a.date),
        }
    }
}
