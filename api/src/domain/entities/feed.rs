//! Feed domain entity
//!
//! Mirrors an RSS 2.0 document: one `channel` with its `item` list.
//! The JSON field names are part of the public contract of `GET /feeds`
//! and use capitalized keys (`Channel`, `Title`, `PubDate`, ...).

use serde::{Serialize, Serializer};

/// A decoded RSS document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feed {
    #[serde(rename = "Channel")]
    pub channel: Channel,
}

/// The `channel` element of an RSS document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    /// Items in document order
    #[serde(rename = "Item", serialize_with = "serialize_items")]
    pub items: Vec<FeedItem>,
}

/// One `item` element of a channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Raw `pubDate` text, never parsed
    pub pub_date: String,
}

impl Feed {
    pub fn item_count(&self) -> usize {
        self.channel.items.len()
    }
}

/// A channel without items is emitted as `null`, not `[]`.
fn serialize_items<S>(items: &[FeedItem], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if items.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.collect_seq(items)
    }
}
