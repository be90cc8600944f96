//! Resource model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::{AppError, Result};

/// Rating assigned when the creator supplies none.
pub const DEFAULT_RATING: &str = "0.0";

/// File type assigned when the creator supplies none.
pub const DEFAULT_FILE_TYPE: &str = "pdf";

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Closed set of resource categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "resource_category", rename_all = "kebab-case")]
pub enum ResourceCategory {
    Notes,
    Pyqs,
    Books,
    CompanyPyqs,
    Interview,
    StudyMaterials,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 6] = [
        ResourceCategory::Notes,
        ResourceCategory::Pyqs,
        ResourceCategory::Books,
        ResourceCategory::CompanyPyqs,
        ResourceCategory::Interview,
        ResourceCategory::StudyMaterials,
    ];

    /// Wire value, identical to the serde and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Notes => "notes",
            ResourceCategory::Pyqs => "pyqs",
            ResourceCategory::Books => "books",
            ResourceCategory::CompanyPyqs => "company-pyqs",
            ResourceCategory::Interview => "interview",
            ResourceCategory::StudyMaterials => "study-materials",
        }
    }

    /// Human-readable label shown by clients.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Notes => "Study Notes",
            ResourceCategory::Pyqs => "Semester PYQs",
            ResourceCategory::Books => "Reference Books",
            ResourceCategory::CompanyPyqs => "Company PYQs",
            ResourceCategory::Interview => "Interview Resources",
            ResourceCategory::StudyMaterials => "Study Materials",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        ResourceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown category '{}'", s)))
    }
}

/// Resource entity
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub subject: String,
    pub semester: Option<String>,
    pub file_url: String,
    pub file_size: String,
    pub file_type: String,
    pub downloads: i64,
    /// Decimal with one fractional digit, kept as text for display
    pub rating: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Resource {
    /// Numeric rating used for ordering; unparsable text counts as zero.
    pub fn rating_value(&self) -> f64 {
        self.rating.trim().parse().unwrap_or(0.0)
    }

    /// Suggested filename for a download of this resource.
    pub fn download_filename(&self) -> String {
        format!("{}.{}", self.title, self.file_type)
    }
}

/// Request body for creating a resource.
///
/// Required text fields are optional here so a missing field surfaces as a
/// validation error naming it rather than as a body rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub semester: Option<String>,
    pub file_url: Option<String>,
    pub file_size: Option<String>,
    pub file_type: Option<String>,
    pub rating: Option<String>,
}

/// Validated input for a new resource, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub subject: String,
    pub semester: Option<String>,
    pub file_url: String,
    pub file_size: String,
    pub file_type: String,
    pub rating: String,
}

impl NewResource {
    /// Materialize a stored record from validated input.
    pub fn into_resource(self, id: i64, downloads: i64, uploaded_at: DateTime<Utc>) -> Resource {
        Resource {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            subject: self.subject,
            semester: self.semester,
            file_url: self.file_url,
            file_size: self.file_size,
            file_type: self.file_type,
            downloads,
            rating: self.rating,
            uploaded_at,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CreateResourceRequest {
    /// Check required fields and apply defaults.
    pub fn validate(self) -> Result<NewResource> {
        let mut missing = Vec::new();
        let mut require = |name: &'static str, value: Option<String>| {
            let value = present(value);
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let title = require("title", self.title);
        let description = require("description", self.description);
        let category = require("category", self.category);
        let subject = require("subject", self.subject);
        let file_url = require("fileUrl", self.file_url);
        let file_size = require("fileSize", self.file_size);

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing or empty required fields: {}",
                missing.join(", ")
            )));
        }

        let category: ResourceCategory = category.parse()?;
        let rating = match present(self.rating) {
            Some(raw) => normalize_rating(&raw)?,
            None => DEFAULT_RATING.to_string(),
        };

        Ok(NewResource {
            title,
            description,
            category,
            subject,
            semester: present(self.semester),
            file_url,
            file_size,
            file_type: present(self.file_type).unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()),
            rating,
        })
    }
}

/// Parse a rating and render it with exactly one decimal place.
pub fn normalize_rating(raw: &str) -> Result<String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Rating '{}' is not a number", raw)))?;

    if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
        return Err(AppError::Validation(format!(
            "Rating must be between 0.0 and {:.1}, got '{}'",
            MAX_RATING, raw
        )));
    }

    // -0.0 passes the range check
    Ok(format!("{:.1}", value + 0.0))
}

/// Aggregate counts per category group.
///
/// `pyqs` includes company PYQs; study materials are not counted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct ResourceStats {
    pub notes: i64,
    pub pyqs: i64,
    pub books: i64,
    pub interviews: i64,
}
