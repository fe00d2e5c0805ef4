use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Fallback when `size` is missing or unparseable.
const DEFAULT_PAGE_SIZE: u64 = 6;
/// Upper bound on a single page.
const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub applicants: i32,
    pub owner_email: String,
    pub status: Option<String>,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub owner_email: String,
    pub status: Option<String>,
    pub metadata: Option<Value>,
}

/// Partial update: only supplied fields change.
#[derive(Debug, Deserialize)]
pub struct JobPatch {
    pub status: Option<String>,
    pub applicants: Option<i32>,
}

/// Raw query params of the windowed listing. Numeric fields arrive as
/// strings so a garbage `page=abc` degrades to the default instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobsCountQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
}

/// Canonical filter over the jobs collection: case-insensitive substring
/// match on the title plus an exact category match. Both optional; empty
/// strings count as absent.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl JobFilter {
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.trim().is_empty()),
            category: category.filter(|c| !c.is_empty()),
        }
    }
}

/// Sort order on the deadline field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSort {
    DeadlineAsc,
    DeadlineDesc,
}

impl JobSort {
    /// `"asc"` sorts ascending, any other non-empty value descending,
    /// absent means natural order.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param {
            None | Some("") => None,
            Some("asc") => Some(Self::DeadlineAsc),
            Some(_) => Some(Self::DeadlineDesc),
        }
    }

    pub fn order_clause(&self) -> &'static str {
        match self {
            Self::DeadlineAsc => " ORDER BY deadline ASC",
            Self::DeadlineDesc => " ORDER BY deadline DESC",
        }
    }
}

/// Skip/limit window derived from 1-indexed `page` and `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub page: u64,
    pub size: u64,
}

impl Window {
    /// Parses with fallback: anything that is not an integer >= 1 becomes
    /// page 1 or the default size. Size is clamped so a single request
    /// cannot drain the table.
    pub fn from_params(page: Option<&str>, size: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let size = size
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|s| *s >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.size
    }

    pub fn limit(&self) -> u64 {
        self.size
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_computes_skip_from_page_and_size() {
        let w = Window::from_params(Some("2"), Some("5"));
        assert_eq!(w.offset(), 5);
        assert_eq!(w.limit(), 5);

        let w = Window::from_params(Some("1"), Some("10"));
        assert_eq!(w.offset(), 0);

        let w = Window::from_params(Some("7"), Some("20"));
        assert_eq!(w.offset(), 120);
    }

    #[test]
    fn window_falls_back_on_garbage() {
        for bad in [None, Some("abc"), Some(""), Some("0"), Some("-3"), Some("1.5")] {
            let w = Window::from_params(bad, bad);
            assert_eq!(w.page, 1, "page for {bad:?}");
            assert_eq!(w.size, DEFAULT_PAGE_SIZE, "size for {bad:?}");
        }
    }

    #[test]
    fn window_clamps_oversized_pages() {
        let w = Window::from_params(Some("1"), Some("5000"));
        assert_eq!(w.size, MAX_PAGE_SIZE);
    }

    #[test]
    fn sort_param_mapping() {
        assert_eq!(JobSort::from_param(Some("asc")), Some(JobSort::DeadlineAsc));
        assert_eq!(
            JobSort::from_param(Some("desc")),
            Some(JobSort::DeadlineDesc)
        );
        assert_eq!(
            JobSort::from_param(Some("anything")),
            Some(JobSort::DeadlineDesc)
        );
        assert_eq!(JobSort::from_param(Some("")), None);
        assert_eq!(JobSort::from_param(None), None);
    }

    #[test]
    fn filter_treats_empty_strings_as_absent() {
        let f = JobFilter::new(Some("".into()), Some("".into()));
        assert!(f.search.is_none());
        assert!(f.category.is_none());

        let f = JobFilter::new(Some("  ".into()), None);
        assert!(f.search.is_none());

        let f = JobFilter::new(Some("engineer".into()), Some("IT".into()));
        assert_eq!(f.search.as_deref(), Some("engineer"));
        assert_eq!(f.category.as_deref(), Some("IT"));
    }
}
