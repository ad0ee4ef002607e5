//! Async store client.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use linkstore_core::{walk_path, Record, WalkStart, WalkStep};

use crate::error::Error;
use crate::types::{parse_base_url, ClientConfig, WalkResults};

/// Async client for a linkstore server.
///
/// The same operations as the blocking `StoreClient`, as `async fn`s.
/// In-flight calls are independent and may complete in any order;
/// nothing here sequences one against another.
pub struct AsyncStoreClient {
    client: Client,
    base_url: Url,
    config: ClientConfig,
}

impl AsyncStoreClient {
    /// Create a client with default options.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with explicit options.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            config,
        })
    }

    /// Store a record.
    ///
    /// Records without a key are POSTed to the bucket and the server
    /// assigns one; keyed records are PUT in place (unless
    /// [`ClientConfig::always_post`] is set). Returns the stored
    /// representation as echoed by the server, or `None` when
    /// [`ClientConfig::no_return_body`] suppresses the echo.
    pub async fn store(&self, record: &Record) -> Result<Option<Record>, Error> {
        self.store_with(record, !self.config.no_return_body).await
    }

    /// Store a record, overriding the configured return-body behavior.
    pub async fn store_with(
        &self,
        record: &Record,
        return_body: bool,
    ) -> Result<Option<Record>, Error> {
        let mut path = format!("{}/", record.bucket);
        if let Some(key) = &record.key {
            path.push_str(key);
        }
        let url = self.base_url.join(&path)?;
        tracing::debug!(%url, "store");

        let mut builder = if self.config.always_post || record.key.is_none() {
            self.client.post(url)
        } else {
            self.client.put(url)
        };
        if return_body {
            builder = builder.query(&[("returnbody", "true")]);
        }

        let response = check_status(builder.json(record).send().await?).await?;
        if return_body {
            Ok(Some(response.json().await?))
        } else {
            Ok(None)
        }
    }

    /// Fetch the record at bucket/key.
    ///
    /// Returns `None` when the store has no object at that address.
    pub async fn fetch(&self, bucket: &str, key: &str) -> Result<Option<Record>, Error> {
        let url = self.base_url.join(&format!("{}/{}", bucket, key))?;
        tracing::debug!(%url, "fetch");

        let response = self.client.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Delete the record at bucket/key.
    pub async fn remove(&self, bucket: &str, key: &str) -> Result<(), Error> {
        let url = self.base_url.join(&format!("{}/{}", bucket, key))?;
        tracing::debug!(%url, "remove");

        check_status(self.client.delete(url).send().await?).await?;
        Ok(())
    }

    /// Walk the link graph from `start`, one filter step at a time.
    pub async fn walk(
        &self,
        start: impl Into<WalkStart>,
        spec: &[WalkStep],
    ) -> Result<WalkResults, Error> {
        let start = start.into();
        let url = self.base_url.join(&walk_path(&start, spec))?;
        tracing::debug!(%url, "walk");

        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-2xx response into [`Error::UnexpectedStatus`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::UnexpectedStatus {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        body,
    })
}
