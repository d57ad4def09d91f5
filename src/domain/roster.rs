//! Roster filtering and pagination.
//!
//! Rosters are filtered by a free-text query over an explicit set of
//! fields per record type, then cut into pages. Filtering always runs over
//! the full record set and paging over the filtered result. Input order is
//! preserved throughout.

use serde::{Deserialize, Serialize};

use crate::error::KitError;

/// Records that can be matched by a roster search.
pub trait Searchable {
    /// The text fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Allowed page sizes. Arbitrary sizes are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PageSize {
    /// One record per page.
    One,
    /// Ten records per page.
    #[default]
    Ten,
    /// One hundred records per page.
    Hundred,
    /// One thousand records per page.
    Thousand,
}

impl PageSize {
    /// Every selectable page size, smallest first.
    pub const OPTIONS: [Self; 4] = [Self::One, Self::Ten, Self::Hundred, Self::Thousand];

    /// Number of records per page.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Ten => 10,
            Self::Hundred => 100,
            Self::Thousand => 1000,
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::One => 1,
            PageSize::Ten => 10,
            PageSize::Hundred => 100,
            PageSize::Thousand => 1000,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = KitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .into_iter()
            .find(|size| u32::from(*size) == value)
            .ok_or(KitError::InvalidPageSize(value))
    }
}

/// One page of a filtered roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Number of records that matched the query.
    pub total_count: usize,
    /// Number of pages, never less than one.
    pub total_pages: usize,
    /// The page actually returned (after clamping), 1-indexed.
    pub page: usize,
    /// Page size used.
    pub page_size: PageSize,
}

impl<T> Page<T> {
    /// Converts the page's items, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Returns the records whose search fields contain `query`.
///
/// The query is trimmed and lower-cased; an empty query matches every
/// record.
#[must_use]
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Number of pages needed for `count` records.
#[must_use]
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Filters `records` by `query` and returns the requested page.
///
/// `page` is 1-indexed and clamped into `[1, total_pages]`.
#[must_use]
pub fn paginate<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    page_size: PageSize,
    page: usize,
) -> Page<&'a T> {
    let filtered = filter_records(records, query);
    let total_count = filtered.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.clamp(1, total_pages);
    let offset = (page - 1) * page_size.get();

    let items = filtered
        .into_iter()
        .skip(offset)
        .take(page_size.get())
        .collect();

    Page {
        items,
        total_count,
        total_pages,
        page,
        page_size,
    }
}

/// Search and paging state for one roster view.
///
/// Changing the query or the page size starts over at page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterQuery {
    /// Free-text query.
    pub query: String,
    /// Records per page.
    pub page_size: PageSize,
    /// Requested page, 1-indexed.
    pub page: usize,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self::new("", PageSize::default())
    }
}

impl RosterQuery {
    /// Creates a query positioned at the first page.
    #[must_use]
    pub fn new(query: impl Into<String>, page_size: PageSize) -> Self {
        Self {
            query: query.into(),
            page_size,
            page: 1,
        }
    }

    /// Replaces the query text and resets to page 1.
    #[must_use]
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self::new(query, self.page_size)
    }

    /// Replaces the page size and resets to page 1.
    #[must_use]
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self::new(self.query, page_size)
    }

    /// Moves to `page`. Out-of-range pages clamp when applied.
    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Runs the query against `records`.
    #[must_use]
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Page<&'a T> {
        paginate(records, &self.query, self.page_size, self.page)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        name: String,
        email: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.email.as_str()]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                name: format!("Person {i}"),
                email: format!("p{i}@example.org"),
            })
            .collect()
    }

    fn names<T: std::ops::Deref<Target = Row>>(items: &[T]) -> Vec<String> {
        items.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn twenty_five_records_make_three_pages() {
        let data = rows(25);
        let lens: Vec<usize> = (1..=3)
            .map(|p| paginate(&data, "", PageSize::Ten, p).items.len())
            .collect();
        assert_eq!(lens, vec![10, 10, 5]);
        assert_eq!(paginate(&data, "", PageSize::Ten, 1).total_pages, 3);
    }

    #[test]
    fn pages_partition_the_filtered_set() {
        let data = rows(237);
        for size in PageSize::OPTIONS {
            let first = paginate(&data, "person 1", size, 1);
            let mut seen = HashSet::new();
            let mut total = 0;
            for p in 1..=first.total_pages {
                for item in paginate(&data, "person 1", size, p).items {
                    total += 1;
                    assert!(seen.insert(item.name.clone()), "duplicate {}", item.name);
                }
            }
            assert_eq!(total, first.total_count);
        }
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let data = rows(12);
        let page = paginate(&data, "  PERSON 1 ", PageSize::Hundred, 1);
        assert_eq!(names(&page.items), vec!["Person 1", "Person 10", "Person 11"]);
        let by_email = paginate(&data, "P3@EXAMPLE", PageSize::Ten, 1);
        assert_eq!(names(&by_email.items), vec!["Person 3"]);
    }

    #[test]
    fn non_empty_query_never_grows_results() {
        let data = rows(40);
        let all = paginate(&data, "", PageSize::Thousand, 1).total_count;
        for q in ["person", "2", "@", "nobody", "P", "example.org"] {
            assert!(paginate(&data, q, PageSize::Thousand, 1).total_count <= all);
        }
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let data = rows(25);
        let last = paginate(&data, "", PageSize::Ten, 3);
        let far = paginate(&data, "", PageSize::Ten, 100);
        assert_eq!(far, last);
        assert_eq!(paginate(&data, "", PageSize::Ten, 0).page, 1);
    }

    #[test]
    fn empty_roster_has_one_empty_page() {
        let data: Vec<Row> = Vec::new();
        let page = paginate(&data, "x", PageSize::Ten, 5);
        assert!(page.items.is_empty());
        assert_eq!((page.total_count, page.total_pages, page.page), (0, 1, 1));
    }

    #[test]
    fn order_is_preserved() {
        let data = vec![
            Row { name: "Zed".into(), email: "z@x".into() },
            Row { name: "Amy".into(), email: "a@x".into() },
            Row { name: "Mia".into(), email: "m@x".into() },
        ];
        let page = paginate(&data, "@x", PageSize::Ten, 1);
        assert_eq!(names(&page.items), vec!["Zed", "Amy", "Mia"]);
    }

    #[test]
    fn page_size_accepts_only_enumerated_values() {
        assert!(matches!(PageSize::try_from(100), Ok(PageSize::Hundred)));
        assert!(matches!(PageSize::try_from(1), Ok(PageSize::One)));
        assert!(matches!(
            PageSize::try_from(0),
            Err(KitError::InvalidPageSize(0))
        ));
        assert!(matches!(
            PageSize::try_from(25),
            Err(KitError::InvalidPageSize(25))
        ));
    }

    #[test]
    fn page_size_serializes_as_number() {
        let Ok(json) = serde_json::to_string(&PageSize::Thousand) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "1000");
        assert!(serde_json::from_str::<PageSize>("50").is_err());
    }

    #[test]
    fn changing_query_or_size_resets_page() {
        let q = RosterQuery::new("cruz", PageSize::Ten).with_page(4);
        assert_eq!(q.page, 4);
        assert_eq!(q.clone().with_query("dela").page, 1);
        let resized = q.with_page_size(PageSize::Hundred);
        assert_eq!((resized.page, resized.query.as_str()), (1, "cruz"));
    }

    #[test]
    fn default_query_starts_on_first_page() {
        let q = RosterQuery::default();
        assert_eq!(q, RosterQuery::new("", PageSize::Ten));
        assert_eq!(q.page, 1);
    }
}
