use std::sync::Arc;
use tracing::info;

use models::project::Project;
use models::record::Resource;

use crate::catalog::{self, ProjectStats};
use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Generic CRUD service over one resource kind's collection.
///
/// Identifier policy: the next id is `max(existing ids, default 0) + 1`.
/// Freed ids below the maximum are never refilled. The policy is computed
/// from a point-in-time snapshot, so it is only safe for a single writer.
pub struct ResourceCollectionService<R: Resource> {
    store: Arc<dyn ResourceStore<R>>,
}

impl<R: Resource> ResourceCollectionService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { store }
    }

    /// Insert the kind's sample record when the store starts empty.
    pub async fn ensure_seeded(&self) -> Result<(), ServiceError> {
        if self.store.list().await?.is_empty() {
            self.store.insert(R::sample()).await?;
            info!(kind = R::KIND, "seeded sample record");
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        self.store.list().await
    }

    pub async fn get(&self, id: i64) -> Result<R, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::LABEL))
    }

    pub async fn create(&self, patch: R::Patch) -> Result<R, ServiceError> {
        R::validate(&patch)?;
        let records = self.store.list().await?;
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        let record = R::create(next_id, patch);
        self.store.insert(record.clone()).await?;
        info!(kind = R::KIND, id = next_id, "created record");
        Ok(record)
    }

    pub async fn update(&self, id: i64, patch: R::Patch) -> Result<R, ServiceError> {
        let mut record = self.get(id).await?;
        record.merge(patch);
        self.store.update(record.clone()).await?;
        info!(kind = R::KIND, id, "updated record");
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.store.delete(id).await? {
            return Err(ServiceError::not_found(R::LABEL));
        }
        info!(kind = R::KIND, id, "deleted record");
        Ok(())
    }
}

/// Catalog queries only the project kind exposes.
impl ResourceCollectionService<Project> {
    pub async fn search(&self, q: &str, category: &str) -> Result<Vec<Project>, ServiceError> {
        Ok(catalog::search(&self.list().await?, q, category))
    }

    pub async fn categories(&self) -> Result<Vec<String>, ServiceError> {
        Ok(catalog::categories(&self.list().await?))
    }

    pub async fn stats(&self) -> Result<ProjectStats, ServiceError> {
        Ok(catalog::stats(&self.list().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use models::project::{Project, ProjectPatch, ProjectStatus};

    fn svc() -> ResourceCollectionService<Project> {
        ResourceCollectionService::new(MemoryStore::new())
    }

    fn patch(title: &str, description: &str) -> ProjectPatch {
        ProjectPatch {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_on_empty_collection_assigns_id_one_and_defaults() {
        let svc = svc();
        let created = svc.create(patch("A", "B")).await.expect("create");
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "A");
        assert_eq!(created.description, "B");
        assert_eq!(created.category, "Other");
        assert_eq!(created.status, ProjectStatus::InProgress);
        assert!(created.tags.is_empty());
        assert_eq!(svc.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn id_allocation_is_max_plus_one_not_gap_fill() {
        let svc = svc();
        svc.create(patch("one", "d")).await.expect("create 1");
        svc.create(patch("two", "d")).await.expect("create 2");
        svc.create(patch("three", "d")).await.expect("create 3");
        svc.delete(2).await.expect("delete 2");

        // ids are now [1, 3]; the freed 2 must not be reused
        let next = svc.create(patch("four", "d")).await.expect("create 4");
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn ids_restart_from_max_after_deleting_the_tail() {
        let svc = svc();
        svc.create(patch("one", "d")).await.expect("create 1");
        svc.create(patch("two", "d")).await.expect("create 2");
        svc.delete(2).await.expect("delete 2");

        // max of remaining ids is 1, so the tail id is handed out again
        let next = svc.create(patch("again", "d")).await.expect("create");
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn create_without_required_fields_leaves_collection_unchanged() {
        let svc = svc();
        let missing = ProjectPatch { title: Some("A".into()), ..Default::default() };
        let err = svc.create(missing).await.expect_err("must fail");
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(svc.list().await.expect("list").is_empty());

        let empty = ProjectPatch {
            title: Some("".into()),
            description: Some("B".into()),
            ..Default::default()
        };
        assert!(svc.create(empty).await.is_err());
        assert!(svc.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let svc = svc();
        let created = svc
            .create(ProjectPatch {
                title: Some("A".into()),
                description: Some("B".into()),
                tags: Some(vec!["rust".into()]),
                ..Default::default()
            })
            .await
            .expect("create");

        let updated = svc
            .update(created.id, ProjectPatch {
                status: Some(ProjectStatus::Completed),
                ..Default::default()
            })
            .await
            .expect("update");
        assert_eq!(updated.status, ProjectStatus::Completed);
        assert_eq!(updated.title, "A");
        assert_eq!(updated.tags, vec!["rust".to_string()]);

        let fetched = svc.get(created.id).await.expect("get");
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let svc = svc();
        let err = svc.update(42, ProjectPatch::default()).await.expect_err("404");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = svc();
        let created = svc.create(patch("A", "B")).await.expect("create");
        svc.delete(created.id).await.expect("delete");
        let err = svc.get(created.id).await.expect_err("404");
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Project not found"));
        let err = svc.delete(created.id).await.expect_err("already gone");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn seeding_runs_once_and_only_on_empty_stores() {
        let svc = svc();
        svc.ensure_seeded().await.expect("seed");
        assert_eq!(svc.list().await.expect("list").len(), 1);
        assert_eq!(svc.get(1).await.expect("get").title, Project::sample().title);

        // second boot over the same store must not duplicate the sample
        svc.ensure_seeded().await.expect("seed again");
        assert_eq!(svc.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn search_matches_title_description_and_tags() {
        let svc = svc();
        svc.create(ProjectPatch {
            title: Some("Chat App".into()),
            description: Some("Realtime messaging".into()),
            tags: Some(vec!["React".into(), "WebSocket".into()]),
            category: Some("Web Development".into()),
            ..Default::default()
        })
        .await
        .expect("create");
        svc.create(ProjectPatch {
            title: Some("Compiler".into()),
            description: Some("A toy language".into()),
            category: Some("Systems".into()),
            ..Default::default()
        })
        .await
        .expect("create");

        let hits = svc.search("react", "all").await.expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Chat App");

        let hits = svc.search("", "Systems").await.expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Compiler");

        let hits = svc.search("toy", "Web Development").await.expect("search");
        assert!(hits.is_empty());
    }
}
