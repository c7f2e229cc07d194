//! Per-invocation result types.

use serde::{Deserialize, Serialize};

use crate::event::FileReference;

/// One resized image written back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedImage {
    /// The object that triggered the resize
    pub source: FileReference,

    /// Key of the resized copy (same bucket as the source)
    pub target_key: String,

    /// Result locator for the resized copy
    pub url: String,

    /// Output dimensions
    pub width: u32,
    pub height: u32,

    /// Encoded size in bytes
    pub size_bytes: u64,

    /// ETag reported by the store, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
}

/// Everything one notification produced, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationReport {
    pub published: Vec<PublishedImage>,
}

impl InvocationReport {
    pub fn len(&self) -> usize {
        self.published.len()
    }

    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }

    /// Result URLs in processing order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.published.iter().map(|p| p.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_without_missing_etag() {
        let report = InvocationReport {
            published: vec![PublishedImage {
                source: FileReference::new("b", "a.jpg"),
                target_key: "a_50x50.jpeg".into(),
                url: "https://s3-eu-west-1.amazonaws.com/b/a_50x50.jpeg".into(),
                width: 50,
                height: 50,
                size_bytes: 812,
                e_tag: None,
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["published"][0]["target_key"], "a_50x50.jpeg");
        assert!(json["published"][0].get("e_tag").is_none());
        assert_eq!(report.urls().count(), 1);
    }
}
