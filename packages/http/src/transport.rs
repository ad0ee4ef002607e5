//! HTTP execution seam for the blocking client.
//!
//! The client drives a [`Transport`] rather than a concrete HTTP client,
//! so tests can substitute a double that never touches the network.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::types::{StoreRequest, StoreResponse};

/// Executes one HTTP exchange against the store.
pub trait Transport: Send + Sync {
    /// Execute a request and return the decoded response.
    ///
    /// Returns `Err` with a message if the exchange itself fails;
    /// non-2xx responses are returned as responses, not errors.
    fn execute(&self, request: &StoreRequest) -> Result<StoreResponse, String>;
}

/// Production transport over a blocking reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { client })
    }

    /// Create with the default timeout of 30 seconds.
    pub fn with_default_timeout() -> Result<Self, String> {
        Self::new(Duration::from_secs(30))
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &StoreRequest) -> Result<StoreResponse, String> {
        let method: http::Method = request.method.into();
        let mut req_builder = self.client.request(method, &request.url);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send().map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let body_text = response.text().map_err(|e| e.to_string())?;
        let body = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);

        Ok(StoreResponse {
            status,
            status_text,
            body,
            body_text: Some(body_text),
        })
    }
}

/// Mock transport for unit tests.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// A transport that records requests and replays canned responses.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        /// Responses keyed by absolute request URL.
        responses: Arc<Mutex<HashMap<String, StoreResponse>>>,
        /// Fallback when no URL matches.
        default_response: Arc<Mutex<Option<StoreResponse>>>,
        /// Every request executed, in order.
        recorded: Arc<Mutex<Vec<StoreRequest>>>,
        /// Error message when failing all requests.
        failure: Arc<Mutex<Option<String>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a response for a specific URL.
        pub fn with_response(self, url: impl Into<String>, response: StoreResponse) -> Self {
            self.responses.lock().unwrap().insert(url.into(), response);
            self
        }

        /// Set a fallback response when no URL matches.
        pub fn with_default_response(self, response: StoreResponse) -> Self {
            *self.default_response.lock().unwrap() = Some(response);
            self
        }

        /// Fail every request with an error message.
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            *self.failure.lock().unwrap() = Some(message.into());
            self
        }

        /// All requests executed so far.
        pub fn recorded(&self) -> Vec<StoreRequest> {
            self.recorded.lock().unwrap().clone()
        }

        /// A 200 response with the given JSON body.
        pub fn success(body: serde_json::Value) -> StoreResponse {
            let body_text = body.to_string();
            StoreResponse {
                status: 200,
                status_text: "OK".to_string(),
                body,
                body_text: Some(body_text),
            }
        }

        /// An empty-bodied response with the given status.
        pub fn status(status: u16, reason: &str) -> StoreResponse {
            StoreResponse {
                status,
                status_text: reason.to_string(),
                body: serde_json::Value::Null,
                body_text: None,
            }
        }

        pub fn not_found() -> StoreResponse {
            Self::status(404, "Not Found")
        }
    }

    impl Transport for MockTransport {
        fn execute(&self, request: &StoreRequest) -> Result<StoreResponse, String> {
            self.recorded.lock().unwrap().push(request.clone());

            if let Some(message) = self.failure.lock().unwrap().clone() {
                return Err(message);
            }

            if let Some(response) = self.responses.lock().unwrap().get(&request.url) {
                return Ok(response.clone());
            }

            if let Some(response) = self.default_response.lock().unwrap().clone() {
                return Ok(response);
            }

            Ok(Self::not_found())
        }
    }
}
