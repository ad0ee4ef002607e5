//! Wire-level types shared by the blocking and async clients.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use linkstore_core::Record;

use crate::error::Error;

/// HTTP method for store requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// One request to the store, ready for a transport to execute.
///
/// `url` is absolute; the client joins the store-relative path onto its
/// base URL before handing the request over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreRequest {
    pub method: Method,
    pub url: String,
    pub query: HashMap<String, String>,
    /// Request body, sent as JSON.
    pub body: Option<Value>,
}

impl StoreRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreResponse {
    /// HTTP status code.
    pub status: u16,
    /// Status text (e.g. "OK", "Not Found").
    pub status_text: String,
    /// Response body parsed as JSON; null when empty or not JSON.
    pub body: Value,
    /// Raw body text.
    pub body_text: Option<String>,
}

impl StoreResponse {
    /// Check if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into a specific type.
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// Results of a walk: one group of records per kept step, in step order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkResults {
    pub results: Vec<Vec<Record>>,
}

/// Client-wide options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientConfig {
    /// Always POST writes, even when the record already has a key.
    pub always_post: bool,
    /// Never ask the store to echo the stored representation back.
    pub no_return_body: bool,
}

/// Parse a base URL, normalizing its path to end with `/` so relative
/// joins append instead of replacing the last segment.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let mut base = Url::parse(raw)?;
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    Ok(base)
}
