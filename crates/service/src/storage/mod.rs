pub mod json_store;
pub mod memory;

use async_trait::async_trait;

use models::record::Resource;

use crate::errors::ServiceError;

/// Durable holder of one resource kind's ordered collection.
///
/// Two production shapes implement this: a whole-document JSON file and a
/// relational table. The CRUD service must produce identical externally
/// observable results over either; an in-memory fake backs the unit tests.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// The full collection in insertion order.
    async fn list(&self) -> Result<Vec<R>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<R>, ServiceError>;
    async fn insert(&self, record: R) -> Result<(), ServiceError>;
    /// Replace the stored record whose id matches `record.id()`.
    async fn update(&self, record: R) -> Result<(), ServiceError>;
    /// Remove by id; returns whether the record existed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}
