//! Command center core: pure state machine and view-model helpers.
mod category;
mod effect;
mod filter;
mod message;
mod msg;
mod registry;
mod state;
mod stats;
mod templates;
mod update;
mod view_model;

pub use category::{Category, Source};
pub use effect::Effect;
pub use filter::{CategoryFilter, FilterState, ProjectFilter, SourceFilter};
pub use message::{FeedItem, Message, MessageId, ProjectFeeds};
pub use msg::Msg;
pub use registry::{MatchCase, ProjectRegistry};
pub use state::{AppState, SessionState};
pub use stats::Stats;
pub use templates::{TemplateEntry, TemplateId, TemplateRegistry, TemplateStore, DEFAULT_TEMPLATES};
pub use update::update;
pub use view_model::{AppViewModel, FeedItemView, FeedView, MessageRowView, TemplateRowView};
