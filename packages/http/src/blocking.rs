//! Blocking store client.

use url::Url;

use linkstore_core::{walk_path, Record, WalkStart, WalkStep};

use crate::error::Error;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{parse_base_url, ClientConfig, Method, StoreRequest, StoreResponse, WalkResults};

/// Blocking client for a linkstore server.
///
/// Each operation issues a single HTTP request and returns the decoded
/// result; there is no retry or local recovery, and failures propagate
/// unchanged. Calls are independent of one another, so a shared client
/// can be used from multiple threads.
///
/// # Example
///
/// ```ignore
/// use linkstore_core::{Record, WalkStep};
/// use linkstore_http::blocking::StoreClient;
///
/// let client = StoreClient::new("http://localhost:8098/data/")?;
///
/// // Store a new note; the server assigns the key.
/// let note = Record::new("note", serde_json::json!({"text": "hello"}));
/// let stored = client.store(&note)?.expect("echoed body");
///
/// // Who wrote it?
/// let authors = client.walk(
///     ("note", stored.key.as_deref().unwrap()),
///     &[WalkStep::any().with_bucket("person").with_tag("author")],
/// )?;
/// ```
pub struct StoreClient {
    base_url: Url,
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl StoreClient {
    /// Create a client with default options and the reqwest transport.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with explicit options.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self, Error> {
        let transport =
            ReqwestTransport::with_default_timeout().map_err(|message| Error::Transport { message })?;
        Self::with_transport(base_url, config, Box::new(transport))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(
        base_url: &str,
        config: ClientConfig,
        transport: Box<dyn Transport>,
    ) -> Result<Self, Error> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            config,
            transport,
        })
    }

    /// Store a record.
    ///
    /// Records without a key are POSTed to the bucket and the server
    /// assigns one; keyed records are PUT in place (unless
    /// [`ClientConfig::always_post`] is set). Returns the stored
    /// representation as echoed by the server, or `None` when
    /// [`ClientConfig::no_return_body`] suppresses the echo.
    pub fn store(&self, record: &Record) -> Result<Option<Record>, Error> {
        self.store_with(record, !self.config.no_return_body)
    }

    /// Store a record, overriding the configured return-body behavior.
    pub fn store_with(&self, record: &Record, return_body: bool) -> Result<Option<Record>, Error> {
        let method = if self.config.always_post || record.key.is_none() {
            Method::Post
        } else {
            Method::Put
        };

        let mut path = format!("{}/", record.bucket);
        if let Some(key) = &record.key {
            path.push_str(key);
        }
        let url = self.base_url.join(&path)?;
        tracing::debug!(%url, ?method, "store");

        let mut request =
            StoreRequest::new(method, url.as_str()).with_body(serde_json::to_value(record)?);
        if return_body {
            request = request.with_query("returnbody", "true");
        }

        let response = self.execute(&request)?;
        if !response.is_success() {
            return Err(unexpected_status(response));
        }

        if return_body {
            Ok(Some(response.json()?))
        } else {
            Ok(None)
        }
    }

    /// Fetch the record at bucket/key.
    ///
    /// Returns `None` when the store has no object at that address.
    pub fn fetch(&self, bucket: &str, key: &str) -> Result<Option<Record>, Error> {
        let url = self.base_url.join(&format!("{}/{}", bucket, key))?;
        tracing::debug!(%url, "fetch");

        let response = self.execute(&StoreRequest::get(url.as_str()))?;
        if response.status == 404 {
            return Ok(None);
        }
        if !response.is_success() {
            return Err(unexpected_status(response));
        }

        Ok(Some(response.json()?))
    }

    /// Delete the record at bucket/key.
    pub fn remove(&self, bucket: &str, key: &str) -> Result<(), Error> {
        let url = self.base_url.join(&format!("{}/{}", bucket, key))?;
        tracing::debug!(%url, "remove");

        let response = self.execute(&StoreRequest::delete(url.as_str()))?;
        if !response.is_success() {
            return Err(unexpected_status(response));
        }
        Ok(())
    }

    /// Walk the link graph from `start`, one filter step at a time.
    ///
    /// The step sequence is compiled with [`walk_path`] and sent as a
    /// single GET; the store returns one group of records per kept step.
    pub fn walk(
        &self,
        start: impl Into<WalkStart>,
        spec: &[WalkStep],
    ) -> Result<WalkResults, Error> {
        let start = start.into();
        let url = self.base_url.join(&walk_path(&start, spec))?;
        tracing::debug!(%url, "walk");

        let response = self.execute(&StoreRequest::get(url.as_str()))?;
        if !response.is_success() {
            return Err(unexpected_status(response));
        }

        Ok(response.json()?)
    }

    fn execute(&self, request: &StoreRequest) -> Result<StoreResponse, Error> {
        self.transport
            .execute(request)
            .map_err(|message| Error::Transport { message })
    }
}

fn unexpected_status(response: StoreResponse) -> Error {
    Error::UnexpectedStatus {
        status: response.status,
        status_text: response.status_text,
        body: response.body_text.unwrap_or_default(),
    }
}
