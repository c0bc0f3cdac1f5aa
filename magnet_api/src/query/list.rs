use super::{common::DEFAULT_LIST_LIMIT, Query};

/// Query for the cursor-paginated `/api/issues` and `/api/pages` listings.
#[derive(Default, Clone, Debug)]
pub struct ListQuery {
    pub search: Option<String>,
    /// Page size. `None` (or a non-positive value) uses the API default.
    pub limit: Option<i64>,
    /// Opaque `pagination.nextCursor` from a previous response.
    pub cursor: Option<String>,
}

impl ListQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = Some(cursor.to_string());
        self
    }

    /// Page size actually sent. An explicit limit wins; a bare cursor gets
    /// [`DEFAULT_LIST_LIMIT`].
    pub fn effective_limit(&self) -> Option<i64> {
        let cursor = self.cursor.as_deref().filter(|c| !c.is_empty());
        match self.limit.filter(|l| *l > 0) {
            Some(limit) => Some(limit),
            None if cursor.is_some() => Some(DEFAULT_LIST_LIMIT),
            None => None,
        }
    }
}

impl Query for ListQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(limit) = self.effective_limit() {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("cursor".to_string(), cursor.to_string()));
        }
        pairs
    }
}
