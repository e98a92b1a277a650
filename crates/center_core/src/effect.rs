#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the remote refresh sequence and re-fetch both collections.
    StartRefresh,
    /// Mirror an optimistic category change to the backend.
    SyncCategory {
        id: crate::MessageId,
        category: String,
    },
    /// Overwrite the persisted template snapshot with the full list.
    PersistTemplates { snapshot: Vec<String> },
    /// Write template text to the system clipboard.
    CopyToClipboard { text: String },
}
