//! Exit-on-error wrapper around the API client.

use std::fmt;

use magnet_api::types::{
    CreateIssueRequest, CreatePageRequest, CreatedResource, IssueDetail, ListIssuesResponse,
    ListPagesResponse, PageDetail, SearchResponse,
};
use magnet_api::{Client, Error, ListQuery, RawResponse, Request, SearchQuery};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;

/// Called with every error instead of exiting.
pub type ErrorHook = Box<dyn Fn(&Error) + Send + Sync>;

/// API client for the command layer.
///
/// Without an error hook, any failure (transport, API status, or response
/// decode) is written to stderr and the process exits with code 1. With a
/// hook installed the hook sees the error and it is returned to the caller.
pub struct MagnetClient {
    inner: Client,
    on_error: Option<ErrorHook>,
}

impl MagnetClient {
    pub fn new(inner: Client) -> Self {
        Self {
            inner,
            on_error: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new(Client::new(&config.api_key, &config.base_url)?))
    }

    /// Resolves the environment and builds the client, exiting on failure.
    pub fn from_env_or_exit() -> Self {
        let config = Config::from_env_or_exit();
        Self::from_config(&config).unwrap_or_else(|e| exit_with(&e))
    }

    /// Installs a hook that intercepts errors, turning off process exit.
    pub fn with_error_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// The non-exiting client underneath.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    fn settle<T>(&self, result: Result<T, Error>) -> Result<T, Error> {
        result.map_err(|err| match &self.on_error {
            Some(hook) => {
                hook(&err);
                err
            }
            None => exit_with(&err),
        })
    }

    pub async fn execute(&self, req: &Request) -> Result<RawResponse, Error> {
        self.settle(self.inner.execute(req).await)
    }

    pub async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        self.settle(self.inner.get(path, query).await)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        self.settle(self.inner.post(path, body).await)
    }

    pub async fn list_issues(&self, query: &ListQuery) -> Result<ListIssuesResponse, Error> {
        self.settle(self.inner.list_issues(query).await)
    }

    pub async fn get_issue(&self, id: &str) -> Result<IssueDetail, Error> {
        self.settle(self.inner.get_issue(id).await)
    }

    pub async fn create_issue(&self, req: &CreateIssueRequest) -> Result<CreatedResource, Error> {
        self.settle(self.inner.create_issue(req).await)
    }

    pub async fn list_pages(&self, query: &ListQuery) -> Result<ListPagesResponse, Error> {
        self.settle(self.inner.list_pages(query).await)
    }

    pub async fn get_page(&self, id: &str) -> Result<PageDetail, Error> {
        self.settle(self.inner.get_page(id).await)
    }

    pub async fn create_page(&self, req: &CreatePageRequest) -> Result<CreatedResource, Error> {
        self.settle(self.inner.create_page(req).await)
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        self.settle(self.inner.search(query).await)
    }
}

/// Writes `err` to stderr and exits with code 1.
pub fn exit_with(err: &dyn fmt::Display) -> ! {
    tracing::debug!("terminating after fatal error");
    eprintln!("{}", err);
    std::process::exit(1)
}
