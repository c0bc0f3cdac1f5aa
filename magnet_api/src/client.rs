//! HTTP client for the Magnet API.

use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    errors::map_error,
    query::{ListQuery, Query, SearchQuery},
    request::{RawResponse, Request},
    types::{
        CreateIssueRequest, CreatePageRequest, CreatedResource, Envelope, IssueDetail,
        IssueEnvelope, ListIssuesResponse, ListPagesResponse, PageDetail, PageEnvelope,
        SearchResponse,
    },
    Error,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

const USER_AGENT: &str = concat!("magnet-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Magnet API.
///
/// Built once per invocation and never mutated. Every call returns its error
/// instead of terminating the process.
#[derive(Clone)]
pub struct Client {
    /// Trimmed, without a trailing slash.
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for `base_url`, authenticating with `api_key`.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, req: &Request) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, &req.path).as_str())?;
        Ok(req.add_to_url(&url))
    }

    /// Sends one request and buffers the whole body.
    ///
    /// Non-2xx statuses are mapped through [`map_error`].
    pub async fn execute(&self, req: &Request) -> Result<RawResponse, Error> {
        let url = self.get_url(req)?;
        tracing::debug!(method = %req.method, %url, "sending request");

        let mut builder = self
            .http
            .request(req.method.clone(), url)
            .header(API_KEY_HEADER, &self.api_key);
        if let (true, Some(body)) = (req.sends_body(), &req.body) {
            let encoded = serde_json::to_vec(body).map_err(Error::Encode)?;
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(encoded);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map(|b| b.to_vec());
        finish_response(status, body, &req.path)
    }

    /// Executes `req` and decodes a non-empty body into `T`.
    ///
    /// An empty success body leaves `T` at its default.
    pub async fn send<T>(&self, req: &Request) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let resp = self.execute(req).await?;
        if resp.body.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_slice(&resp.body).map_err(Error::Decode)
    }

    pub async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let mut req = Request::get(path);
        req.query.extend_from_slice(query);
        self.send(&req).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let req = Request::post(path).with_json(body)?;
        self.send(&req).await
    }

    /// Fetches a single resource that may arrive wrapped or bare.
    async fn get_single<E: Envelope>(&self, path: &str) -> Result<E::Inner, Error> {
        let resp = self.execute(&Request::get(path)).await?;
        decode_envelope::<E>(&resp.body)
    }

    /// Lists issues, one page per call.
    pub async fn list_issues(&self, query: &ListQuery) -> Result<ListIssuesResponse, Error> {
        self.send(&Request::get("/api/issues").with_query(query))
            .await
    }

    pub async fn get_issue(&self, id: &str) -> Result<IssueDetail, Error> {
        self.get_single::<IssueEnvelope>(&resource_path("/api/issues", id))
            .await
    }

    /// Creates an issue from markdown.
    pub async fn create_issue(&self, req: &CreateIssueRequest) -> Result<CreatedResource, Error> {
        self.post("/api/issues/markdown", req).await
    }

    pub async fn list_pages(&self, query: &ListQuery) -> Result<ListPagesResponse, Error> {
        self.send(&Request::get("/api/pages").with_query(query))
            .await
    }

    pub async fn get_page(&self, id: &str) -> Result<PageDetail, Error> {
        self.get_single::<PageEnvelope>(&resource_path("/api/pages", id))
            .await
    }

    pub async fn create_page(&self, req: &CreatePageRequest) -> Result<CreatedResource, Error> {
        self.post("/api/pages/markdown", req).await
    }

    /// Full-text search across issues and pages.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        self.send(&Request::get("/api/search").with_query(query))
            .await
    }
}

/// Turns a status and the outcome of reading the body into a result.
///
/// On a non-2xx status a failed body read counts as an empty body, so the
/// status is still mapped.
fn finish_response<E>(
    status: u16,
    body: Result<Vec<u8>, E>,
    path: &str,
) -> Result<RawResponse, Error>
where
    E: Into<Error>,
{
    let success = (200..300).contains(&status);
    let body = match body {
        Ok(body) => body,
        Err(e) if !success => {
            let err: Error = e.into();
            tracing::debug!(status, "failed to read error body: {}", err);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(status, bytes = body.len(), "response received");

    if !success {
        let err = map_error(status, &body, path);
        tracing::debug!(path, "request failed: {}", err);
        return Err(err);
    }

    Ok(RawResponse { status, body })
}

/// Decodes the wrapped shape first and, if its inner field is absent, the
/// same bytes as the bare resource.
pub fn decode_envelope<E: Envelope>(body: &[u8]) -> Result<E::Inner, Error> {
    if let Some(inner) = serde_json::from_slice::<E>(body)
        .ok()
        .and_then(|envelope| envelope.into_inner())
    {
        return Ok(inner);
    }
    serde_json::from_slice::<E::Inner>(body).map_err(Error::Decode)
}

/// `base/{id}` with `id` escaped as one path segment.
fn resource_path(base: &str, id: &str) -> String {
    format!("{}/{}", base, urlencoding::encode(id))
}
