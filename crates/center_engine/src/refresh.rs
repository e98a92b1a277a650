use std::sync::Arc;

use crate::{RefreshOutcome, Transport, TransportError};

/// Clock injected by the platform; the engine never reads the wall clock
/// itself.
pub type NowFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Runs the full refresh sequence in order: trigger the source refresh,
/// trigger the feed refresh, then re-fetch both collections. The first
/// failure aborts the remaining steps.
pub async fn run_refresh(
    transport: &dyn Transport,
    now_utc: &NowFn,
) -> Result<RefreshOutcome, TransportError> {
    transport.refresh_messages().await?;
    transport.refresh_feeds().await?;
    let messages = transport.fetch_messages(None).await?;
    let feeds = transport.fetch_project_feeds().await?;
    Ok(RefreshOutcome {
        messages,
        feeds,
        refreshed_at: now_utc(),
    })
}
