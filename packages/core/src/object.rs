//! Stored objects and their wire representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::link::Link;

/// One object in the store.
///
/// A record carries the user payload under `object` together with its
/// address and outgoing links. Server-managed fields that ride along on
/// fetched records (vector clock, modification metadata) are kept in
/// `meta`, so a record can be fetched, modified, and stored back without
/// losing them.
///
/// A record without a key has no identity yet; storing it asks the
/// server to mint one.
///
/// Bucket and key values must not contain `/` or `,` - the store's path
/// syntax reserves both, and no escaping is applied anywhere in this
/// client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Bucket the record lives in.
    pub bucket: String,

    /// Key within the bucket, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The user payload.
    pub object: Value,

    /// Outgoing links to other records.
    #[serde(default)]
    pub links: Vec<Link>,

    /// Server-managed fields, passed through untouched.
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl Record {
    /// Create a record with no key and no links.
    pub fn new(bucket: impl Into<String>, object: Value) -> Self {
        Self {
            bucket: bucket.into(),
            key: None,
            object,
            links: Vec::new(),
            meta: Map::new(),
        }
    }

    /// Set the record's key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append an outgoing link.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_is_omitted_when_unset() {
        let record = Record::new("note", json!({"text": "hi"}));
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.get("key").is_none());
        assert_eq!(value["bucket"], "note");
        assert_eq!(value["object"]["text"], "hi");
    }

    #[test]
    fn links_serialize_as_triples() {
        let record = Record::new("note", json!({}))
            .with_key("1")
            .with_link(Link::new("person", "alice", "author"));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["key"], "1");
        assert_eq!(value["links"], json!([["person", "alice", "author"]]));
    }

    #[test]
    fn missing_links_default_to_empty() {
        let record: Record =
            serde_json::from_value(json!({"bucket": "b", "key": "k", "object": {}})).unwrap();
        assert!(record.links.is_empty());
        assert!(record.meta.is_empty());
    }

    #[test]
    fn server_fields_round_trip() {
        let wire = json!({
            "bucket": "note",
            "key": "1",
            "object": {"text": "hi"},
            "links": [["person", "alice", "author"]],
            "vclock": "a85hYGBgzGDKBVIcR4M2cgczH7HlMCUx5rEymM3/fxYsyoUqygIA",
            "lastmod": "Mon, 05 Aug 2024 09:12:44 GMT",
            "vtag": "6dKBIXjEEaUFzxhrVH7ndg"
        });

        let record: Record = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(record.meta["vclock"], wire["vclock"]);
        assert_eq!(serde_json::to_value(&record).unwrap(), wire);
    }
}
