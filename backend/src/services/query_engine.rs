//! Resource query engine.
//!
//! Pure, synchronous filtering, ordering and aggregation over an already
//! materialized resource collection. Storage backends either run these
//! functions directly or push the equivalent predicates down to the database.
//!
//! Filters combine with logical AND. All orderings are stable, so records
//! with equal sort keys keep their collection order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::models::{Resource, ResourceCategory, ResourceStats};

/// Category value meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "all";

/// Number of records returned by the featured listing.
pub const FEATURED_LIMIT: usize = 6;

/// Requested ordering of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest upload first
    Latest,
    /// Highest rating first
    Rating,
    /// Most downloaded first
    Downloads,
    /// Title, ascending
    Name,
    /// Most downloaded first; fallback for absent or unrecognized values
    #[default]
    Popular,
}

impl SortBy {
    /// Parse a `sortBy` parameter. Anything unrecognized means `Popular`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("latest") => SortBy::Latest,
            Some("rating") => SortBy::Rating,
            Some("downloads") => SortBy::Downloads,
            Some("name") => SortBy::Name,
            _ => SortBy::Popular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Latest => "latest",
            SortBy::Rating => "rating",
            SortBy::Downloads => "downloads",
            SortBy::Name => "name",
            SortBy::Popular => "popular",
        }
    }
}

/// Filter and sort parameters for a listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceQuery {
    pub category: Option<String>,
    pub subject: Option<String>,
    pub semester: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortBy,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ResourceQuery {
    pub fn sorted(sort_by: SortBy) -> Self {
        Self {
            sort_by,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Active category constraint; `"all"` and empty mean none.
    pub fn category_filter(&self) -> Option<&str> {
        non_empty(&self.category).filter(|c| *c != ALL_CATEGORIES)
    }

    pub fn subject_filter(&self) -> Option<&str> {
        non_empty(&self.subject)
    }

    pub fn semester_filter(&self) -> Option<&str> {
        non_empty(&self.semester)
    }

    /// Case-folded search text, if any.
    pub fn search_needle(&self) -> Option<String> {
        non_empty(&self.search).map(str::to_lowercase)
    }

    /// True when the record passes every active filter.
    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_with_needle(resource, self.search_needle().as_deref())
    }

    fn matches_with_needle(&self, resource: &Resource, needle: Option<&str>) -> bool {
        if let Some(category) = self.category_filter() {
            if resource.category.as_str() != category {
                return false;
            }
        }
        if let Some(subject) = self.subject_filter() {
            if resource.subject != subject {
                return false;
            }
        }
        if let Some(semester) = self.semester_filter() {
            if resource.semester.as_deref() != Some(semester) {
                return false;
            }
        }
        match needle {
            Some(needle) => {
                resource.title.to_lowercase().contains(needle)
                    || resource.description.to_lowercase().contains(needle)
                    || resource.subject.to_lowercase().contains(needle)
            }
            None => true,
        }
    }
}

thread_local! {
    static TITLE_COLLATOR: Option<Collator> = root_collator();
}

/// Root-locale collator at tertiary strength.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("Title collator unavailable, using case folding: {}", e);
            None
        }
    }
}

/// Title collation following the Unicode root collation order.
///
/// Accents and case are secondary and tertiary differences, so
/// "Économie" sorts among the E titles and "apple" precedes "Apple".
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| b.cmp(a)),
    })
}

/// Primary-key comparison for the requested ordering.
pub fn compare(sort_by: SortBy, a: &Resource, b: &Resource) -> Ordering {
    match sort_by {
        SortBy::Latest => b.uploaded_at.cmp(&a.uploaded_at),
        SortBy::Rating => b.rating_value().total_cmp(&a.rating_value()),
        SortBy::Name => compare_titles(&a.title, &b.title),
        SortBy::Downloads | SortBy::Popular => b.downloads.cmp(&a.downloads),
    }
}

/// Stable in-place sort.
pub fn sort_resources(resources: &mut [Resource], sort_by: SortBy) {
    resources.sort_by(|a, b| compare(sort_by, a, b));
}

/// Filter then order a collection, preserving input order on ties.
pub fn apply<I>(query: &ResourceQuery, resources: I) -> Vec<Resource>
where
    I: IntoIterator<Item = Resource>,
{
    let needle = query.search_needle();
    let mut matched: Vec<Resource> = resources
        .into_iter()
        .filter(|r| query.matches_with_needle(r, needle.as_deref()))
        .collect();
    sort_resources(&mut matched, query.sort_by);
    matched
}

/// Top records by downloads, at most [`FEATURED_LIMIT`].
pub fn featured<I>(resources: I) -> Vec<Resource>
where
    I: IntoIterator<Item = Resource>,
{
    let mut top = apply(&ResourceQuery::sorted(SortBy::Downloads), resources);
    top.truncate(FEATURED_LIMIT);
    top
}

/// Count records per category group.
pub fn stats<'a, I>(resources: I) -> ResourceStats
where
    I: IntoIterator<Item = &'a Resource>,
{
    resources
        .into_iter()
        .fold(ResourceStats::default(), |mut acc, r| {
            match r.category {
                ResourceCategory::Notes => acc.notes += 1,
                ResourceCategory::Pyqs | ResourceCategory::CompanyPyqs => acc.pyqs += 1,
                ResourceCategory::Books => acc.books += 1,
                ResourceCategory::Interview => acc.interviews += 1,
                ResourceCategory::StudyMaterials => {}
            }
            acc
        })
}
