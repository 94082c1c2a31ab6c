use std::{path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use async_trait::async_trait;

use models::record::Resource;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// JSON file-backed collection store.
///
/// Persists an ordered `Vec<R>` as one pretty-printed JSON array document.
/// Every mutation reads the whole collection, changes it in memory and
/// writes the whole document back; the lock serializes writers within this
/// process only.
#[derive(Clone)]
pub struct JsonCollectionStore<R> {
    inner: Arc<RwLock<Vec<R>>>,
    file_path: PathBuf,
}

impl<R> JsonCollectionStore<R>
where
    R: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty
    /// array if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let records: Vec<R> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: Vec<R> = Vec::new();
                let data = serde_json::to_vec_pretty(&empty)
                    .map_err(|e| ServiceError::Db(e.to_string()))?;
                fs::write(&file_path, data)
                    .await
                    .map_err(|e| ServiceError::Db(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(records)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let records = self.inner.read().await;
        // 2-space pretty output keeps the documents hand-editable.
        let data = serde_json::to_vec_pretty(&*records)
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for JsonCollectionStore<R> {
    async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let records = self.inner.read().await;
        Ok(records.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<R>, ServiceError> {
        let records = self.inner.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: R) -> Result<(), ServiceError> {
        let mut records = self.inner.write().await;
        records.push(record);
        drop(records);
        self.save().await
    }

    async fn update(&self, record: R) -> Result<(), ServiceError> {
        let mut records = self.inner.write().await;
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return Err(ServiceError::not_found(R::LABEL));
        };
        *slot = record;
        drop(records);
        self.save().await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut records = self.inner.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        let existed = records.len() < before;
        drop(records);
        self.save().await?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::project::{Project, ProjectPatch};
    use models::record::Resource;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("portfolio_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_collection_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonCollectionStore::<Project>::new(&tmp).await?;

        // initially empty
        assert_eq!(store.list().await?.len(), 0);

        let a = Project::create(1, ProjectPatch {
            title: Some("A".into()),
            description: Some("first".into()),
            ..Default::default()
        });
        let b = Project::create(2, ProjectPatch {
            title: Some("B".into()),
            description: Some("second".into()),
            ..Default::default()
        });
        store.insert(a.clone()).await?;
        store.insert(b.clone()).await?;

        assert_eq!(store.get(1).await?.as_ref().map(|p| p.title.as_str()), Some("A"));

        // update in place keeps collection order
        let mut a2 = a.clone();
        a2.title = "A2".into();
        store.update(a2).await?;
        let listed = store.list().await?;
        assert_eq!(listed[0].title, "A2");
        assert_eq!(listed[1].title, "B");

        // remove and reload persistence
        assert!(store.delete(2).await?);
        let reloaded = JsonCollectionStore::<Project>::new(&tmp).await?;
        let entries = reloaded.list().await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "A2");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn documents_are_pretty_printed_with_two_spaces() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonCollectionStore::<Project>::new(&tmp).await?;
        store.insert(Project::sample()).await?;

        let text = tokio::fs::read_to_string(&tmp).await?;
        assert!(text.starts_with("[\n  {"));
        assert!(text.contains("\n    \"id\": 1"));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonCollectionStore::<Project>::new(&tmp).await?;
        let ghost = Project::create(9, ProjectPatch {
            title: Some("G".into()),
            description: Some("ghost".into()),
            ..Default::default()
        });
        assert!(matches!(store.update(ghost).await, Err(ServiceError::NotFound(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
