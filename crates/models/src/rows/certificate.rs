use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::certificate::Certificate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certificate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub issuer: String,
    pub category: String,
    pub credential_url: String,
    pub image_url: String,
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Certificate {
    fn from(m: Model) -> Self {
        Certificate {
            id: m.id,
            title: m.title,
            description: m.description,
            issuer: m.issuer,
            category: m.category,
            credential_url: m.credential_url,
            image_url: m.image_url,
            date: m.date,
        }
    }
}

impl From<Certificate> for ActiveModel {
    fn from(c: Certificate) -> Self {
        ActiveModel {
            id: Set(c.id),
            title: Set(c.title),
            description: Set(c.description),
            issuer: Set(c.issuer),
            category: Set(c.category),
            credential_url: Set(c.credential_url),
            image_url: Set(c.image_url),
            date: Set(c.date),
        }
    }
}
