//! Sample catalog used to populate empty stores.

use chrono::{DateTime, TimeZone, Utc};

use super::ResourceStore;
use crate::error::Result;
use crate::models::{NewResource, Resource, ResourceCategory};

/// A fixture record with its historical counters
#[derive(Debug, Clone)]
pub struct SeedResource {
    pub resource: NewResource,
    pub downloads: i64,
    pub uploaded_at: DateTime<Utc>,
}

#[allow(clippy::too_many_arguments)]
fn sample(
    n: u32,
    title: &str,
    description: &str,
    category: ResourceCategory,
    subject: &str,
    semester: Option<&str>,
    file_size: &str,
    downloads: i64,
    rating: &str,
    day: u32,
) -> SeedResource {
    SeedResource {
        resource: NewResource {
            title: title.to_string(),
            description: description.to_string(),
            category,
            subject: subject.to_string(),
            semester: semester.map(str::to_string),
            file_url: format!("/files/sample-{}.pdf", n),
            file_size: file_size.to_string(),
            file_type: "pdf".to_string(),
            rating: rating.to_string(),
        },
        downloads,
        uploaded_at: Utc
            .with_ymd_and_hms(2024, 1, day, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// The ten sample resources, in insertion order.
pub fn sample_resources() -> Vec<SeedResource> {
    use ResourceCategory::*;

    vec![
        sample(
            1,
            "Data Structures & Algorithms",
            "Comprehensive notes covering all DSA topics with examples and practice problems.",
            Notes,
            "Computer Science",
            Some("Semester 3"),
            "2.3 MB",
            2100,
            "4.8",
            15,
        ),
        sample(
            2,
            "Google SDE Interview Questions",
            "Real interview questions asked at Google for SDE positions with detailed solutions.",
            CompanyPyqs,
            "Software Engineering",
            None,
            "1.9 MB",
            1800,
            "4.9",
            10,
        ),
        sample(
            3,
            "Machine Learning Handbook",
            "Complete guide to ML algorithms, implementations, and real-world applications.",
            Books,
            "Machine Learning",
            None,
            "5.1 MB",
            3200,
            "4.7",
            5,
        ),
        sample(
            4,
            "Operating Systems PYQ",
            "Previous year questions from top universities with detailed solutions and explanations.",
            Pyqs,
            "Operating Systems",
            Some("Semester 4"),
            "1.7 MB",
            1500,
            "4.6",
            12,
        ),
        sample(
            5,
            "System Design Interview Guide",
            "Complete system design interview preparation with real examples and case studies.",
            Interview,
            "System Design",
            None,
            "3.4 MB",
            2800,
            "4.9",
            8,
        ),
        sample(
            6,
            "Database Management Systems",
            "Comprehensive DBMS notes with SQL queries, normalization, and practical examples.",
            Notes,
            "Database Management",
            Some("Semester 5"),
            "2.8 MB",
            1900,
            "4.8",
            3,
        ),
        sample(
            7,
            "Microsoft Software Engineer Questions",
            "Latest interview questions from Microsoft with coding problems and solutions.",
            CompanyPyqs,
            "Software Engineering",
            None,
            "2.1 MB",
            1600,
            "4.7",
            14,
        ),
        sample(
            8,
            "Computer Networks Complete Guide",
            "All networking concepts explained with protocols, layers, and practical examples.",
            Books,
            "Computer Science",
            Some("Semester 6"),
            "4.2 MB",
            2400,
            "4.8",
            7,
        ),
        sample(
            9,
            "Advanced Algorithms Notes",
            "Advanced algorithmic concepts including dynamic programming, graph algorithms, and more.",
            Notes,
            "Computer Science",
            Some("Semester 7"),
            "3.1 MB",
            1750,
            "4.7",
            18,
        ),
        sample(
            10,
            "Python Programming PYQ",
            "Previous year questions for Python programming with solutions and explanations.",
            Pyqs,
            "Computer Science",
            Some("Semester 2"),
            "1.8 MB",
            2200,
            "4.6",
            16,
        ),
    ]
}

/// Insert the sample catalog.
///
/// Without `reset` a non-empty store is left untouched. Returns the records
/// inserted.
pub async fn seed_store(store: &dyn ResourceStore, reset: bool) -> Result<Vec<Resource>> {
    if reset {
        tracing::info!(backend = store.backend_name(), "Clearing resource store");
        store.clear().await?;
    } else {
        let existing = store.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Resource store already populated, skipping seed");
            return Ok(Vec::new());
        }
    }

    let mut inserted = Vec::new();
    for seed in sample_resources() {
        inserted.push(store.insert_seeded(seed).await?);
    }

    tracing::info!(count = inserted.len(), "Seeded resource store");
    Ok(inserted)
}
