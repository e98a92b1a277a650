use crate::view_model::{AppViewModel, FeedItemView, FeedView, MessageRowView, TemplateRowView};
use crate::{
    FeedItem, FilterState, Message, MessageId, ProjectFeeds, ProjectRegistry, Stats,
    TemplateRegistry,
};

/// Refresh session gate. Re-entrant refresh triggers are ignored while a
/// sequence is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Refreshing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    messages: Vec<Message>,
    feeds: ProjectFeeds,
    registry: ProjectRegistry,
    filter: FilterState,
    templates: TemplateRegistry,
    template_input: String,
    pending_delete: Option<usize>,
    session: SessionState,
    last_refresh: Option<String>,
    error: Option<String>,
    loaded_once: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn template_input(&self) -> &str {
        &self.template_input
    }

    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    pub fn last_refresh(&self) -> Option<&str> {
        self.last_refresh.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The complete ordered template content list for persistence.
    pub fn templates_snapshot(&self) -> Vec<String> {
        self.templates.snapshot()
    }

    /// Returns and clears the render flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_refresh(&mut self) {
        self.session = SessionState::Refreshing;
        self.mark_dirty();
    }

    pub(crate) fn complete_refresh(
        &mut self,
        messages: Vec<Message>,
        feeds: ProjectFeeds,
        refreshed_at: String,
    ) {
        self.messages = messages;
        self.feeds = feeds;
        self.last_refresh = Some(refreshed_at);
        self.loaded_once = true;
        self.error = None;
        self.session = SessionState::Idle;
        self.mark_dirty();
    }

    /// Keeps previously loaded data; the timestamp is only recorded on
    /// success. If nothing was ever loaded, seed one placeholder message
    /// and feed entry so the panes are never structurally empty.
    pub(crate) fn fail_refresh(&mut self, error: String) {
        self.session = SessionState::Idle;
        self.error = Some(error);
        if !self.loaded_once {
            if self.messages.is_empty() {
                self.messages.push(Message::placeholder());
            }
            if self.feeds.is_empty() {
                self.feeds
                    .insert("system".to_string(), vec![FeedItem::placeholder()]);
            }
        }
        self.mark_dirty();
    }

    /// Optimistic local category change; the stored token becomes whatever
    /// the operator picked. Returns false when the id is unknown.
    pub(crate) fn apply_category(&mut self, id: MessageId, token: &str) -> bool {
        let Some(message) = self.messages.iter_mut().find(|message| message.id == id) else {
            return false;
        };
        message.category = token.to_string();
        self.mark_dirty();
        true
    }

    pub(crate) fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.mark_dirty();
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterState {
        self.mark_dirty();
        &mut self.filter
    }

    pub(crate) fn templates_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.templates
    }

    pub(crate) fn restore_templates(&mut self, snapshot: Vec<String>) {
        self.templates = TemplateRegistry::from_persisted(snapshot);
        self.mark_dirty();
    }

    pub(crate) fn set_template_input(&mut self, text: String) {
        self.template_input = text;
        self.mark_dirty();
    }

    pub(crate) fn clear_template_input(&mut self) {
        self.template_input.clear();
    }

    pub(crate) fn set_pending_delete(&mut self, index: Option<usize>) {
        self.pending_delete = index;
        self.mark_dirty();
    }

    pub(crate) fn take_pending_delete(&mut self) -> Option<usize> {
        self.pending_delete.take()
    }

    pub(crate) fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.mark_dirty();
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
        self.mark_dirty();
    }

    /// Derives the presentation snapshot. Filtering, mention detection and
    /// the aggregate counts are recomputed on every call; nothing here is
    /// cached across mutations.
    pub fn view(&self) -> AppViewModel {
        let stats = Stats::collect(&self.messages, &self.registry);
        let messages = self
            .messages
            .iter()
            .filter(|message| self.filter.matches(message, &self.registry))
            .map(|message| MessageRowView {
                id: message.id,
                sender: message.sender.clone(),
                body: message.body.clone(),
                source_token: message.source.clone(),
                category_token: message.category.clone(),
                source: message.canonical_source(),
                category: message.canonical_category(),
                timestamp: message.timestamp.clone(),
                mentions: owned(self.registry.mentions(&message.body)),
            })
            .collect();
        let feeds = self
            .feeds
            .iter()
            .map(|(owner, items)| FeedView {
                owner: owner.clone(),
                items: items
                    .iter()
                    .map(|item| FeedItemView {
                        content: item.content.clone(),
                        timestamp: item.timestamp.clone(),
                        mentions: owned(self.registry.mentions(&item.content)),
                    })
                    .collect(),
            })
            .collect();
        let templates = self
            .templates
            .entries()
            .iter()
            .map(|entry| TemplateRowView {
                id: entry.id,
                content: entry.content.clone(),
            })
            .collect();

        AppViewModel {
            session: self.session,
            error: self.error.clone(),
            last_refresh: self.last_refresh.clone(),
            filter: self.filter.clone(),
            stats,
            messages,
            total_messages: self.messages.len(),
            feeds,
            templates,
            template_input: self.template_input.clone(),
            pending_delete: self.pending_delete,
            dirty: self.dirty,
        }
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
