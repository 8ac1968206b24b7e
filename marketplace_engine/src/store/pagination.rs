use serde::Serialize;

pub const DEFAULT_PAGE_LIMIT: usize = 25;

/// One page of a filtered collection. `total` is the size of the whole filtered collection, not of this page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    /// A "page" holding an entire, unpaginated collection.
    pub fn all(results: Vec<T>) -> Self {
        let total = results.len();
        Self { results, total }
    }
}

/// Returns `items[offset..min(offset + limit, total)]` together with `total`. An offset past the end gives an empty
/// page with the correct total.
pub fn paginate<T>(items: Vec<T>, limit: usize, offset: usize) -> Page<T> {
    let total = items.len();
    if offset >= total {
        return Page { results: Vec::new(), total };
    }
    let results = items.into_iter().skip(offset).take(limit).collect();
    Page { results, total }
}
