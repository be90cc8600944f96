//! In-memory storage backend.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{not_found, ResourceStore, SeedResource};
use crate::error::Result;
use crate::models::{NewResource, Resource, ResourceStats};
use crate::services::query_engine::{self, ResourceQuery};

#[derive(Default)]
struct Inner {
    /// Keyed by id; ids are assigned in increasing order, so key order is insertion order
    resources: BTreeMap<i64, Resource>,
    last_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Process-local resource store.
///
/// Reads share the lock; inserts and increments hold it exclusively, so
/// concurrent increments on one record never lose updates.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample catalog
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        for seed in super::seed::sample_resources() {
            let id = inner.next_id();
            inner.resources.insert(
                id,
                seed.resource.into_resource(id, seed.downloads, seed.uploaded_at),
            );
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    async fn snapshot(&self) -> Vec<Resource> {
        self.inner.read().await.resources.values().cloned().collect()
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, query: &ResourceQuery) -> Result<Vec<Resource>> {
        let snapshot = self.snapshot().await;
        Ok(query_engine::apply(query, snapshot))
    }

    async fn get(&self, id: i64) -> Result<Option<Resource>> {
        Ok(self.inner.read().await.resources.get(&id).cloned())
    }

    async fn insert(&self, resource: NewResource) -> Result<Resource> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let record = resource.into_resource(id, 0, Utc::now());
        inner.resources.insert(id, record.clone());
        Ok(record)
    }

    async fn insert_seeded(&self, seed: SeedResource) -> Result<Resource> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let record = seed
            .resource
            .into_resource(id, seed.downloads, seed.uploaded_at);
        inner.resources.insert(id, record.clone());
        Ok(record)
    }

    async fn increment_downloads(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        let resource = inner.resources.get_mut(&id).ok_or_else(|| not_found(id))?;
        resource.downloads += 1;
        Ok(())
    }

    async fn featured(&self) -> Result<Vec<Resource>> {
        Ok(query_engine::featured(self.snapshot().await))
    }

    async fn stats(&self) -> Result<ResourceStats> {
        let inner = self.inner.read().await;
        Ok(query_engine::stats(inner.resources.values()))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.inner.read().await.resources.len() as i64)
    }

    async fn clear(&self) -> Result<()> {
        // last_id is kept so ids are never reused
        self.inner.write().await.resources.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::ResourceCategory;
    use crate::services::query_engine::SortBy;
    use std::sync::Arc;

    fn new_resource(title: &str, category: ResourceCategory) -> NewResource {
        NewResource {
            title: title.to_string(),
            description: "desc".to_string(),
            category,
            subject: "Physics".to_string(),
            semester: Some("Semester 1".to_string()),
            file_url: "/files/x.pdf".to_string(),
            file_size: "1 MB".to_string(),
            file_type: "pdf".to_string(),
            rating: "0.0".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.insert(new_resource("A", ResourceCategory::Notes)).await.unwrap();
        let b = store.insert(new_resource("B", ResourceCategory::Books)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.downloads, 0);
        assert!(a.uploaded_at <= b.uploaded_at);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.increment_downloads(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_increment_adds_exactly_one() {
        let store = MemoryStore::seeded();
        let before = store.get(3).await.unwrap().unwrap();
        store.increment_downloads(3).await.unwrap();
        let after = store.get(3).await.unwrap().unwrap();
        assert_eq!(after.downloads, before.downloads + 1);
        assert_eq!(after.uploaded_at, before.uploaded_at);
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        let id = store
            .insert(new_resource("Hot", ResourceCategory::Notes))
            .await
            .unwrap()
            .id;

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment_downloads(id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let resource = store.get(id).await.unwrap().unwrap();
        assert_eq!(resource.downloads, 200);
    }

    #[tokio::test]
    async fn test_list_returns_copies() {
        let store = MemoryStore::seeded();
        let mut listed = store.list(&ResourceQuery::default()).await.unwrap();
        listed[0].downloads = 0;
        listed[0].title = "changed".into();

        let original = store.get(listed[0].id).await.unwrap().unwrap();
        assert_ne!(original.title, "changed");
    }

    #[tokio::test]
    async fn test_seeded_featured_top_six() {
        let store = MemoryStore::seeded();
        let featured = store.featured().await.unwrap();
        let downloads: Vec<i64> = featured.iter().map(|r| r.downloads).collect();
        assert_eq!(downloads, vec![3200, 2800, 2400, 2200, 2100, 1900]);
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let store = MemoryStore::seeded();
        let query = ResourceQuery::sorted(SortBy::Latest).with_category("notes");
        let titles: Vec<String> = store
            .list(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Advanced Algorithms Notes",
                "Data Structures & Algorithms",
                "Database Management Systems",
            ]
        );
    }

    #[tokio::test]
    async fn test_clear_keeps_id_sequence() {
        let store = MemoryStore::new();
        store.insert(new_resource("A", ResourceCategory::Notes)).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        let next = store.insert(new_resource("B", ResourceCategory::Notes)).await.unwrap();
        assert_eq!(next.id, 2);
    }
}
