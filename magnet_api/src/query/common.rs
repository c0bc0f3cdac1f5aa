//! Shared query infrastructure: the [`Query`] trait and pagination defaults.

use url::Url;

/// Page size sent when a cursor is given without an explicit limit, so the
/// server sees the same page size across cursor-driven pages.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Trait implemented by all query builders.
pub trait Query {
    /// Ordered query pairs. Keys may repeat.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}
