//! Core linkstore: the data model layer.
//!
//! This layer defines the shapes that cross the client's API boundary:
//!
//! - [`Record`]: one stored object - bucket, optional key, payload, links
//! - [`Link`]: a directed, tagged edge between records
//! - [`WalkStart`] / [`WalkStep`]: a link traversal specification
//! - [`walk_path`]: compiles a traversal into the store's URL path query
//!   syntax
//!
//! Everything here is pure data: no I/O, no HTTP types, no async. The
//! HTTP client layer lives in `linkstore-http`.
//!
//! # Example
//!
//! ```rust
//! use linkstore_core::{walk_path, WalkStep};
//!
//! let spec = [WalkStep::any().with_tag("author")];
//! assert_eq!(walk_path(&("note", "456").into(), &spec), "note/456/_,author,1/");
//! ```

mod link;
mod object;
mod walk;

pub use link::Link;
pub use object::Record;
pub use walk::{walk_path, WalkStart, WalkStep, WILDCARD};
