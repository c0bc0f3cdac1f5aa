//! Request descriptor and buffered response for [`crate::Client::execute`].

use reqwest::Method;
use serde::Serialize;

use crate::{query::Query, Error};

/// A single API call: method, path, ordered query pairs and an optional JSON body.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Path below the base URL, e.g. `/api/issues`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Only sent for POST and PUT.
    pub body: Option<serde_json::Value>,
}

impl Request {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn with_query(mut self, query: &impl Query) -> Self {
        self.query.extend(query.to_query_pairs());
        self
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body).map_err(Error::Encode)?);
        Ok(self)
    }

    /// Whether the body, if any, goes on the wire.
    pub fn sends_body(&self) -> bool {
        self.body.is_some() && (self.method == Method::POST || self.method == Method::PUT)
    }
}

impl Query for Request {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.query.clone()
    }
}

/// A 2xx response with its body fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
