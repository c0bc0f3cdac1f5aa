use serde::{Deserialize, Serialize};

use super::{meta::null_as_default, Envelope, Pagination, User};

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct PageListItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// `GET /api/pages`
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ListPagesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<PageListItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct PageDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization_id: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct PageEnvelope {
    #[serde(default)]
    pub page: Option<PageDetail>,
}

impl Envelope for PageEnvelope {
    type Inner = PageDetail;

    fn into_inner(self) -> Option<PageDetail> {
        self.page
    }
}

/// Body of `POST /api/pages/markdown`.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct CreatePageRequest {
    pub markdown: String,
    pub title: String,
}

impl CreatePageRequest {
    /// Empty markdown falls back to the title.
    pub fn new(title: &str, markdown: Option<&str>) -> Self {
        let markdown = markdown.filter(|m| !m.is_empty()).unwrap_or(title);
        Self {
            markdown: markdown.to_string(),
            title: title.to_string(),
        }
    }
}
