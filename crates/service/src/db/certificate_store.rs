use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use models::certificate::Certificate;
use models::rows::certificate::{ActiveModel, Column, Entity};

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// SeaORM-backed certificate store.
pub struct CertificateRowStore {
    db: DatabaseConnection,
}

impl CertificateRowStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore<Certificate> for CertificateRowStore {
    async fn list(&self) -> Result<Vec<Certificate>, ServiceError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Certificate::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Certificate>, ServiceError> {
        let found = Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Certificate::from))
    }

    async fn insert(&self, record: Certificate) -> Result<(), ServiceError> {
        let am: ActiveModel = record.into();
        am.insert(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn update(&self, record: Certificate) -> Result<(), ServiceError> {
        let am: ActiveModel = record.into();
        am.update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
