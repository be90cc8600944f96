//! Resource service.
//!
//! Sole entry point for reading and mutating the resource collection. Input
//! validation happens here before anything reaches the store; storage
//! failures are passed through unchanged.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{CreateResourceRequest, Resource, ResourceStats};
use crate::services::query_engine::ResourceQuery;
use crate::storage::ResourceStore;

/// Resource service
#[derive(Clone)]
pub struct ResourceService {
    store: Arc<dyn ResourceStore>,
}

impl ResourceService {
    /// Create a new resource service over the given store
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ResourceStore> {
        &self.store
    }

    /// List resources matching the query
    pub async fn list(&self, query: &ResourceQuery) -> Result<Vec<Resource>> {
        let resources = self.store.list(query).await?;
        tracing::debug!(
            category = ?query.category_filter(),
            subject = ?query.subject_filter(),
            semester = ?query.semester_filter(),
            search = ?query.search,
            sort_by = query.sort_by.as_str(),
            count = resources.len(),
            "Listed resources"
        );
        Ok(resources)
    }

    /// Get a resource by ID; `None` when it does not exist
    pub async fn get(&self, id: i64) -> Result<Option<Resource>> {
        self.store.get(id).await
    }

    /// Validate and store a new resource
    pub async fn create(&self, request: CreateResourceRequest) -> Result<Resource> {
        let input = request.validate()?;
        let resource = self.store.insert(input).await?;
        tracing::info!(
            id = resource.id,
            category = %resource.category,
            title = %resource.title,
            "Created resource"
        );
        Ok(resource)
    }

    /// Record one download. Unknown ids are `NotFound`.
    pub async fn increment_downloads(&self, id: i64) -> Result<()> {
        self.store.increment_downloads(id).await?;
        tracing::info!(id, "Recorded download");
        Ok(())
    }

    /// Most downloaded resources
    pub async fn featured(&self) -> Result<Vec<Resource>> {
        self.store.featured().await
    }

    /// Category-group counts
    pub async fn stats(&self) -> Result<ResourceStats> {
        self.store.stats().await
    }
}
