//! Resource storage backends.
//!
//! Every backend implements [`ResourceStore`]; the concrete backend is chosen
//! once at startup and shared as `Arc<dyn ResourceStore>`.

pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, StorageBackendKind};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{NewResource, Resource, ResourceStats};
use crate::services::query_engine::{ResourceQuery, SortBy, FEATURED_LIMIT};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use seed::SeedResource;

/// Storage contract for the resource collection
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Short backend identifier for logs and health output
    fn backend_name(&self) -> &'static str;

    /// Records matching the query, in query order
    async fn list(&self, query: &ResourceQuery) -> Result<Vec<Resource>>;

    /// Exact lookup; `Ok(None)` when the id is unknown
    async fn get(&self, id: i64) -> Result<Option<Resource>>;

    /// Store validated input as a new record with zero downloads
    async fn insert(&self, resource: NewResource) -> Result<Resource>;

    /// Store a fixture record keeping its counters and timestamp
    async fn insert_seeded(&self, seed: SeedResource) -> Result<Resource>;

    /// Add exactly one download. Unknown ids are `NotFound`.
    async fn increment_downloads(&self, id: i64) -> Result<()>;

    /// Aggregate category-group counts
    async fn stats(&self) -> Result<ResourceStats>;

    /// Total number of records
    async fn count(&self) -> Result<i64>;

    /// Remove every record. Only used when reseeding.
    async fn clear(&self) -> Result<()>;

    /// Most downloaded records, at most [`FEATURED_LIMIT`]
    async fn featured(&self) -> Result<Vec<Resource>> {
        let mut top = self.list(&ResourceQuery::sorted(SortBy::Downloads)).await?;
        top.truncate(FEATURED_LIMIT);
        Ok(top)
    }

    /// Check that the backend is reachable
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Resource {} not found", id))
}

/// Build the backend selected by configuration.
///
/// The postgres backend connects and runs migrations before returning.
pub async fn from_config(config: &Config) -> Result<Arc<dyn ResourceStore>> {
    match config.storage_backend {
        StorageBackendKind::Memory => {
            tracing::info!("Using in-memory resource store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackendKind::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                AppError::Config("DATABASE_URL must be set for the postgres storage backend".into())
            })?;
            let pool = db::create_pool(url, config.database_max_connections).await?;
            tracing::info!("Connected to database");
            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");
            Ok(Arc::new(PostgresStore::new(pool)))
        }
    }
}
