//! # linkstore-http
//!
//! HTTP client for a linkstore server.
//!
//! The store addresses objects by bucket and key, connects them with
//! tagged links, and answers link walks. This crate translates those
//! operations into the store's REST interface:
//!
//! | Operation | Request |
//! |---|---|
//! | `store` (new) | `POST <bucket>/?returnbody=true` |
//! | `store` (keyed) | `PUT <bucket>/<key>?returnbody=true` |
//! | `fetch` | `GET <bucket>/<key>` |
//! | `remove` | `DELETE <bucket>/<key>` |
//! | `walk` | `GET <bucket>/<key>/<b,t,keep>/.../` |
//!
//! ## Blocking client
//!
//! ```ignore
//! use linkstore_core::{Record, WalkStep};
//! use linkstore_http::blocking::StoreClient;
//!
//! let client = StoreClient::new("http://localhost:8098/data/")?;
//!
//! // Store a new note; the server assigns the key.
//! let note = Record::new("note", serde_json::json!({"text": "hello"}));
//! let stored = client.store(&note)?.expect("echoed body");
//!
//! // Who wrote it?
//! let authors = client.walk(
//!     ("note", stored.key.as_deref().unwrap()),
//!     &[WalkStep::any().with_bucket("person").with_tag("author")],
//! )?;
//! ```
//!
//! ## Async client
//!
//! Enable the `async` feature for `AsyncStoreClient`, which offers the
//! same operations as `async fn`s.

pub mod error;
pub mod types;

#[cfg(feature = "blocking")]
pub mod blocking;
#[cfg(feature = "blocking")]
pub mod transport;

#[cfg(feature = "async")]
pub mod async_client;

// Re-export main types
pub use error::Error;
pub use types::{ClientConfig, Method, StoreRequest, StoreResponse, WalkResults};

#[cfg(feature = "blocking")]
pub use blocking::StoreClient;
#[cfg(feature = "blocking")]
pub use transport::{ReqwestTransport, Transport};

#[cfg(feature = "async")]
pub use async_client::AsyncStoreClient;
