use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, Source};

pub type MessageId = u64;

/// Feeds keyed by owner handle, each an ordered run of items.
pub type ProjectFeeds = BTreeMap<String, Vec<FeedItem>>;

/// An inbound message as served by the backend.
///
/// `source` and `category` hold the stored tokens verbatim. Display always
/// shows the stored form; filtering and counting go through the canonical
/// accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: String,
    #[serde(alias = "content", alias = "text")]
    pub body: String,
    pub source: String,
    pub category: String,
    pub timestamp: String,
}

impl Message {
    pub fn canonical_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    pub fn canonical_source(&self) -> Option<Source> {
        Source::parse(&self.source)
    }

    /// Synthetic entry shown when the very first load fails, so the message
    /// pane is never structurally empty.
    pub fn placeholder() -> Self {
        Message {
            id: 0,
            sender: "system".to_string(),
            body: "No messages available - check the backend connection.".to_string(),
            source: Source::Telegram.as_token().to_string(),
            category: Category::Routine.as_token().to_string(),
            timestamp: String::new(),
        }
    }
}

/// One entry of a project feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub content: String,
    pub timestamp: String,
}

impl FeedItem {
    /// Counterpart of [`Message::placeholder`] for the feed pane.
    pub fn placeholder() -> Self {
        FeedItem {
            content: "No feed data available.".to_string(),
            timestamp: String::new(),
        }
    }
}
