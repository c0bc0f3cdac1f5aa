use serde::{Deserialize, Serialize};

use super::{meta::null_as_default, User};

/// Kind of resource a search hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Issue,
    Page,
    /// Any other tag the server sends, or none.
    Other,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Raw `type` tag, passed through unchanged.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl SearchResult {
    pub fn result_type(&self) -> ResultType {
        match self.kind.as_str() {
            "issue" => ResultType::Issue,
            "page" => ResultType::Page,
            _ => ResultType::Other,
        }
    }
}

/// `GET /api/search`
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}
