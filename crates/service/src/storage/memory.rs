use std::sync::Arc;
use tokio::sync::RwLock;

use async_trait::async_trait;

use models::record::Resource;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// In-memory store, the test double for both durable shapes.
#[derive(Clone)]
pub struct MemoryStore<R> {
    inner: Arc<RwLock<Vec<R>>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Arc<Self> {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(records)) })
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
    async fn list(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<R>, ServiceError> {
        Ok(self.inner.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: R) -> Result<(), ServiceError> {
        self.inner.write().await.push(record);
        Ok(())
    }

    async fn update(&self, record: R) -> Result<(), ServiceError> {
        let mut records = self.inner.write().await;
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return Err(ServiceError::not_found(R::LABEL));
        };
        *slot = record;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut records = self.inner.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() < before)
    }
}
