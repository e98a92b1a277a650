use crate::{CategoryFilter, ProjectFilter, SourceFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Operator asked for a refresh of messages and project feeds.
    RefreshRequested,
    /// Engine finished the full refresh sequence.
    RefreshCompleted {
        messages: Vec<crate::Message>,
        feeds: crate::ProjectFeeds,
        refreshed_at: String,
    },
    /// Engine aborted the refresh sequence.
    RefreshFailed { error: String },
    /// Operator picked a category for one message (raw dropdown token).
    CategoryChanged {
        id: crate::MessageId,
        category: String,
    },
    /// Remote acknowledgement for an optimistic category change.
    CategorySynced {
        id: crate::MessageId,
        error: Option<String>,
    },
    /// Sidebar category selection.
    CategoryFilterSelected(CategoryFilter),
    /// Sidebar source selection.
    SourceFilterSelected(SourceFilter),
    /// Sidebar project selection.
    ProjectFilterSelected(ProjectFilter),
    /// Clear all three selectors at once.
    FiltersCleared,
    /// Operator edited the new-template input box.
    TemplateInputChanged(String),
    /// Operator submitted the new-template input.
    TemplateSubmitted,
    /// Operator asked to delete a template; arms the confirmation step.
    TemplateDeleteRequested { index: usize },
    /// Operator confirmed the pending delete.
    TemplateDeleteConfirmed,
    /// Operator declined the pending delete.
    TemplateDeleteCancelled,
    /// Operator dragged a template onto another one.
    TemplateMoved {
        from: crate::TemplateId,
        to: crate::TemplateId,
    },
    /// Operator asked to copy a template to the clipboard.
    TemplateCopyRequested { index: usize },
    /// Restore the persisted template snapshot at startup.
    TemplatesRestored(Vec<String>),
    /// The shell's clipboard write failed.
    ClipboardFailed { error: String },
    /// Operator dismissed the error banner.
    ErrorDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
