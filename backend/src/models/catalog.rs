//! Reference catalog of categories, subjects and semesters.
//!
//! Subjects and semesters are conventions used by clients to build filter
//! menus. Resources are not constrained to them.

use serde::Serialize;
use utoipa::ToSchema;

use super::resource::ResourceCategory;

pub const SUBJECTS: [&str; 16] = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Electronics & Communication",
    "Civil Engineering",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Artificial Intelligence",
    "Data Science",
    "Software Engineering",
    "System Design",
    "Database Management",
    "Operating Systems",
    "Data Structures & Algorithms",
    "Machine Learning",
];

pub const SEMESTERS: [&str; 8] = [
    "Semester 1",
    "Semester 2",
    "Semester 3",
    "Semester 4",
    "Semester 5",
    "Semester 6",
    "Semester 7",
    "Semester 8",
];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryOption {
    pub value: ResourceCategory,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Catalog {
    pub categories: Vec<CategoryOption>,
    pub subjects: Vec<String>,
    pub semesters: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            categories: ResourceCategory::ALL
                .into_iter()
                .map(|value| CategoryOption {
                    value,
                    label: value.label().to_string(),
                })
                .collect(),
            subjects: SUBJECTS.iter().map(|s| s.to_string()).collect(),
            semesters: SEMESTERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
