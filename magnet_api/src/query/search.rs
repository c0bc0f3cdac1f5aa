use super::Query;

/// Query for `/api/search`.
#[derive(Default, Clone, Debug)]
pub struct SearchQuery {
    pub query: String,
    /// Comma-separated resource types (`issue`, `page`). Both when unset.
    pub types: Option<String>,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            types: None,
        }
    }

    pub fn with_types(mut self, types: &str) -> Self {
        self.types = Some(types.to_string());
        self
    }
}

impl Query for SearchQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("query".to_string(), self.query.clone())];
        if let Some(types) = self.types.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("types".to_string(), types.to_string()));
        }
        pairs
    }
}
