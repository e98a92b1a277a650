use crate::{
    Category, FilterState, MessageId, SessionState, Source, Stats, TemplateId,
};

/// Snapshot handed to the presentation layer. Rebuilt from scratch on every
/// `AppState::view` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub error: Option<String>,
    pub last_refresh: Option<String>,
    pub filter: FilterState,
    pub stats: Stats,
    /// Messages passing the active filter, input order preserved.
    pub messages: Vec<MessageRowView>,
    /// Size of the unfiltered collection.
    pub total_messages: usize,
    pub feeds: Vec<FeedView>,
    pub templates: Vec<TemplateRowView>,
    pub template_input: String,
    pub pending_delete: Option<usize>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRowView {
    pub id: MessageId,
    pub sender: String,
    pub body: String,
    /// Stored tokens, shown verbatim.
    pub source_token: String,
    pub category_token: String,
    /// Canonical forms for badge styling; `None` renders unstyled.
    pub source: Option<Source>,
    pub category: Option<Category>,
    pub timestamp: String,
    pub mentions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub owner: String,
    pub items: Vec<FeedItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItemView {
    pub content: String,
    pub timestamp: String,
    pub mentions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRowView {
    pub id: TemplateId,
    pub content: String,
}
