//! Backend assembly for the HTTP layer.
//!
//! Construction picks the store shape once; everything downstream of the
//! returned handle is storage-agnostic.

use std::path::Path;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use models::accomplishment::Accomplishment;
use models::certificate::Certificate;
use models::project::Project;

use crate::collection::ResourceCollectionService;
use crate::db::{
    accomplishment_store::AccomplishmentRowStore, certificate_store::CertificateRowStore,
    project_store::ProjectRowStore,
};
use crate::errors::ServiceError;
use crate::storage::json_store::JsonCollectionStore;

/// The three kind services behind one handle.
#[derive(Clone)]
pub struct Services {
    pub projects: Arc<ResourceCollectionService<Project>>,
    pub certificates: Arc<ResourceCollectionService<Certificate>>,
    pub accomplishments: Arc<ResourceCollectionService<Accomplishment>>,
}

impl Services {
    /// One JSON document per kind under `data_dir`.
    pub async fn file(data_dir: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let dir = data_dir.as_ref();
        Ok(Self {
            projects: Arc::new(ResourceCollectionService::new(
                JsonCollectionStore::new(dir.join("projects.json")).await?,
            )),
            certificates: Arc::new(ResourceCollectionService::new(
                JsonCollectionStore::new(dir.join("certificates.json")).await?,
            )),
            accomplishments: Arc::new(ResourceCollectionService::new(
                JsonCollectionStore::new(dir.join("accomplishments.json")).await?,
            )),
        })
    }

    /// One relational table per kind on the given connection.
    pub fn database(db: DatabaseConnection) -> Self {
        Self {
            projects: Arc::new(ResourceCollectionService::new(Arc::new(
                ProjectRowStore::new(db.clone()),
            ))),
            certificates: Arc::new(ResourceCollectionService::new(Arc::new(
                CertificateRowStore::new(db.clone()),
            ))),
            accomplishments: Arc::new(ResourceCollectionService::new(Arc::new(
                AccomplishmentRowStore::new(db),
            ))),
        }
    }

    /// Seed each kind's sample record into empty stores.
    pub async fn seed(&self) -> Result<(), ServiceError> {
        self.projects.ensure_seeded().await?;
        self.certificates.ensure_seeded().await?;
        self.accomplishments.ensure_seeded().await?;
        Ok(())
    }
}
