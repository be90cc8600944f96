//! Request and response bodies shared by the resource handlers.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Resource;
use crate::services::query_engine::{ResourceQuery, SortBy};

/// Query string accepted by `GET /api/resources`.
///
/// Empty values are treated the same as missing ones.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesQuery {
    /// Category value, or `all`
    pub category: Option<String>,
    /// Exact subject
    pub subject: Option<String>,
    /// Exact semester label
    pub semester: Option<String>,
    /// Case-insensitive text matched against title, description and subject
    pub search: Option<String>,
    /// One of `latest`, `rating`, `downloads`, `name`, `popular`
    pub sort_by: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<ListResourcesQuery> for ResourceQuery {
    fn from(query: ListResourcesQuery) -> Self {
        ResourceQuery {
            category: non_empty(query.category),
            subject: non_empty(query.subject),
            semester: non_empty(query.semester),
            search: non_empty(query.search),
            sort_by: SortBy::parse(query.sort_by.as_deref()),
        }
    }
}

/// Reference returned after a download is recorded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub download_url: String,
    pub filename: String,
    pub success: bool,
}

impl From<&Resource> for DownloadResponse {
    fn from(resource: &Resource) -> Self {
        Self {
            download_url: resource.file_url.clone(),
            filename: resource.download_filename(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceCategory;
    use chrono::Utc;

    #[test]
    fn test_empty_values_are_absent() {
        let query: ResourceQuery = ListResourcesQuery {
            category: Some(String::new()),
            subject: Some("Computer Science".into()),
            semester: Some(String::new()),
            search: Some(String::new()),
            sort_by: Some(String::new()),
        }
        .into();

        assert_eq!(query.category, None);
        assert_eq!(query.subject.as_deref(), Some("Computer Science"));
        assert_eq!(query.semester, None);
        assert_eq!(query.search, None);
        assert_eq!(query.sort_by, SortBy::Popular);
    }

    #[test]
    fn test_sort_by_is_parsed() {
        let query: ResourceQuery = ListResourcesQuery {
            sort_by: Some("latest".into()),
            ..Default::default()
        }
        .into();
        assert_eq!(query.sort_by, SortBy::Latest);
    }

    #[test]
    fn test_sort_by_query_key_is_camel_case() {
        let query: ListResourcesQuery =
            serde_json::from_str(r#"{"sortBy":"rating","category":"books"}"#).unwrap();
        assert_eq!(query.sort_by.as_deref(), Some("rating"));
        assert_eq!(query.category.as_deref(), Some("books"));
    }

    #[test]
    fn test_download_response_from_resource() {
        let resource = Resource {
            id: 3,
            title: "Machine Learning Handbook".into(),
            description: "ML".into(),
            category: ResourceCategory::Books,
            subject: "Machine Learning".into(),
            semester: None,
            file_url: "/files/sample-3.pdf".into(),
            file_size: "5.1 MB".into(),
            file_type: "pdf".into(),
            downloads: 3200,
            rating: "4.7".into(),
            uploaded_at: Utc::now(),
        };

        let body = serde_json::to_value(DownloadResponse::from(&resource)).unwrap();
        assert_eq!(body["downloadUrl"], "/files/sample-3.pdf");
        assert_eq!(body["filename"], "Machine Learning Handbook.pdf");
        assert_eq!(body["success"], true);
    }
}
