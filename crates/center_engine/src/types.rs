use center_core::{Message, MessageId, ProjectFeeds};
use serde::Deserialize;
use thiserror::Error;

/// Optional server-side filter for `GET messages`.
///
/// The core filters locally; these parameters exist for callers that want
/// the backend to pre-narrow large collections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageQuery {
    pub category: Option<String>,
    pub source: Option<String>,
    pub project: Option<String>,
    pub limit: Option<u32>,
}

/// A reply template as served by the remote template store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTemplate {
    pub id: u64,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CategoryCounts {
    pub urgent: usize,
    pub high_priority: usize,
    pub routine: usize,
    pub archive: usize,
}

/// Aggregate summary as served by the backend. The core can also derive
/// the same numbers locally; this endpoint is an optional collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteStats {
    pub total_messages: usize,
    pub telegram_messages: usize,
    pub twitter_messages: usize,
    pub categories: CategoryCounts,
}

/// Result of a full refresh sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub messages: Vec<Message>,
    pub feeds: ProjectFeeds,
    pub refreshed_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response body: {0}")]
    InvalidBody(String),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RefreshFinished {
        result: Result<RefreshOutcome, TransportError>,
    },
    CategorySynced {
        id: MessageId,
        result: Result<(), TransportError>,
    },
}
