use serde::{Deserialize, Serialize};

/// A directed, tagged edge from one record to another.
///
/// On the wire a link is the positional array `[bucket, key, tag]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Link {
    /// Bucket of the target record.
    pub bucket: String,
    /// Key of the target record.
    pub key: String,
    /// Label carried by the edge.
    pub tag: String,
}

impl Link {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            tag: tag.into(),
        }
    }
}

impl From<(String, String, String)> for Link {
    fn from((bucket, key, tag): (String, String, String)) -> Self {
        Self { bucket, key, tag }
    }
}

impl From<Link> for (String, String, String) {
    fn from(link: Link) -> Self {
        (link.bucket, link.key, link.tag)
    }
}
