//! PostgreSQL storage backend.
//!
//! Filters and numeric/time orderings are pushed down to SQL with `id` as the
//! stable secondary key. Title ordering is applied in-process with the query
//! engine comparator so both backends collate identically.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{not_found, ResourceStore, SeedResource};
use crate::error::Result;
use crate::models::{NewResource, Resource, ResourceStats};
use crate::services::query_engine::{self, ResourceQuery, SortBy, FEATURED_LIMIT};

const RESOURCE_COLUMNS: &str = "id, title, description, category, subject, semester, \
     file_url, file_size, file_type, downloads, rating::text AS rating, uploaded_at";

/// PostgreSQL-backed resource store
pub struct PostgresStore {
    db: PgPool,
}

impl PostgresStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Escape `ILIKE` metacharacters so the text matches literally.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `ORDER BY` clause for a sort mode.
pub fn order_clause(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Latest => "uploaded_at DESC, id ASC",
        SortBy::Rating => "rating DESC, id ASC",
        SortBy::Downloads | SortBy::Popular => "downloads DESC, id ASC",
        // Collation happens in-process
        SortBy::Name => "id ASC",
    }
}

fn list_sql(sort_by: SortBy) -> String {
    format!(
        r#"
        SELECT {RESOURCE_COLUMNS}
        FROM resources
        WHERE ($1::text IS NULL OR category::text = $1)
          AND ($2::text IS NULL OR subject = $2)
          AND ($3::text IS NULL OR semester = $3)
          AND ($4::text IS NULL
               OR title ILIKE $4
               OR description ILIKE $4
               OR subject ILIKE $4)
        ORDER BY {}
        "#,
        order_clause(sort_by)
    )
}

#[async_trait]
impl ResourceStore for PostgresStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, query: &ResourceQuery) -> Result<Vec<Resource>> {
        let search_pattern = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let mut resources: Vec<Resource> = sqlx::query_as(&list_sql(query.sort_by))
            .bind(query.category_filter())
            .bind(query.subject_filter())
            .bind(query.semester_filter())
            .bind(search_pattern)
            .fetch_all(&self.db)
            .await?;

        if query.sort_by == SortBy::Name {
            query_engine::sort_resources(&mut resources, SortBy::Name);
        }

        Ok(resources)
    }

    async fn get(&self, id: i64) -> Result<Option<Resource>> {
        let resource: Option<Resource> = sqlx::query_as(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(resource)
    }

    async fn insert(&self, resource: NewResource) -> Result<Resource> {
        let created: Resource = sqlx::query_as(&format!(
            r#"
            INSERT INTO resources (
                title, description, category, subject, semester,
                file_url, file_size, file_type, rating
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::numeric)
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(resource.title)
        .bind(resource.description)
        .bind(resource.category)
        .bind(resource.subject)
        .bind(resource.semester)
        .bind(resource.file_url)
        .bind(resource.file_size)
        .bind(resource.file_type)
        .bind(resource.rating)
        .fetch_one(&self.db)
        .await?;

        Ok(created)
    }

    async fn insert_seeded(&self, seed: SeedResource) -> Result<Resource> {
        let resource = seed.resource;
        let created: Resource = sqlx::query_as(&format!(
            r#"
            INSERT INTO resources (
                title, description, category, subject, semester,
                file_url, file_size, file_type, rating, downloads, uploaded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::numeric, $10, $11)
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(resource.title)
        .bind(resource.description)
        .bind(resource.category)
        .bind(resource.subject)
        .bind(resource.semester)
        .bind(resource.file_url)
        .bind(resource.file_size)
        .bind(resource.file_type)
        .bind(resource.rating)
        .bind(seed.downloads)
        .bind(seed.uploaded_at)
        .fetch_one(&self.db)
        .await?;

        Ok(created)
    }

    async fn increment_downloads(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE resources SET downloads = downloads + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn featured(&self) -> Result<Vec<Resource>> {
        let resources: Vec<Resource> = sqlx::query_as(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources ORDER BY {} LIMIT $1",
            order_clause(SortBy::Downloads)
        ))
        .bind(FEATURED_LIMIT as i64)
        .fetch_all(&self.db)
        .await?;

        Ok(resources)
    }

    async fn stats(&self) -> Result<ResourceStats> {
        let stats: ResourceStats = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE category = 'notes') AS notes,
                COUNT(*) FILTER (WHERE category IN ('pyqs', 'company-pyqs')) AS pyqs,
                COUNT(*) FILTER (WHERE category = 'books') AS books,
                COUNT(*) FILTER (WHERE category = 'interview') AS interviews
            FROM resources
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        Ok(stats)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resources")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    async fn clear(&self) -> Result<()> {
        // The id sequence is left alone so ids are never reused
        sqlx::query("DELETE FROM resources").execute(&self.db).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
