//! Command center engine: backend transport and effect execution.
mod engine;
mod refresh;
mod transport;
mod types;

pub use engine::{EngineConfig, EngineEvents, EngineHandle};
pub use refresh::{run_refresh, NowFn};
pub use transport::{ClientSettings, HttpTransport, Transport};
pub use types::{
    CategoryCounts, EngineEvent, MessageQuery, RefreshOutcome, RemoteStats, RemoteTemplate,
    TransportError,
};
