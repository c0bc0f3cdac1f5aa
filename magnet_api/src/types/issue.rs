use serde::{Deserialize, Serialize};

use super::{meta::null_as_default, Envelope, Pagination, User};

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueListItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub base_branch: String,
    pub branch_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_clerk_id: String,
}

/// `GET /api/issues`
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ListIssuesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub issues: Vec<IssueListItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub base_branch: String,
    pub branch_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_clerk_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization_id: String,
}

/// Wrapped form of `GET /api/issues/{id}`.
#[derive(Deserialize, Debug, Default)]
pub struct IssueEnvelope {
    #[serde(default)]
    pub issue: Option<IssueDetail>,
}

impl Envelope for IssueEnvelope {
    type Inner = IssueDetail;

    fn into_inner(self) -> Option<IssueDetail> {
        self.issue
    }
}

/// Body of `POST /api/issues/markdown`.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    pub markdown: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub base_branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateIssueRequest {
    /// The description doubles as the markdown source.
    pub fn from_markdown(description: &str, base_branch: &str) -> Self {
        Self {
            markdown: description.to_string(),
            description: description.to_string(),
            title: None,
            base_branch: base_branch.to_string(),
            status: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}
