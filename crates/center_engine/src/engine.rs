use std::sync::{mpsc, Arc};
use std::thread;

use center_core::MessageId;
use center_logging::center_warn;
use url::Url;

use crate::refresh::{run_refresh, NowFn};
use crate::transport::{ClientSettings, HttpTransport, Transport};
use crate::EngineEvent;

enum EngineCommand {
    RefreshAll,
    SyncCategory { id: MessageId, category: String },
}

pub struct EngineConfig {
    pub base_url: Url,
    pub settings: ClientSettings,
    pub now_utc: NowFn,
}

/// Command side of the engine; cheap to clone and hand to effect runners.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Event side of the engine; owned by whichever thread drains results.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<(Self, EngineEvents), crate::TransportError> {
        let transport = Arc::new(HttpTransport::new(config.base_url, config.settings)?);
        Ok(Self::with_transport(transport, config.now_utc))
    }

    /// Wires the engine around any transport; tests inject stubs here.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        now_utc: NowFn,
    ) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    center_warn!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let transport = transport.clone();
                let now_utc = now_utc.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(transport.as_ref(), &now_utc, command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn refresh_all(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RefreshAll);
    }

    pub fn sync_category(&self, id: MessageId, category: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SyncCategory {
            id,
            category: category.into(),
        });
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    transport: &dyn Transport,
    now_utc: &NowFn,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::RefreshAll => {
            let result = run_refresh(transport, now_utc).await;
            if let Err(err) = &result {
                center_warn!("Refresh sequence aborted: {}", err);
            }
            let _ = event_tx.send(EngineEvent::RefreshFinished { result });
        }
        EngineCommand::SyncCategory { id, category } => {
            let result = transport.update_category(id, &category).await;
            if let Err(err) = &result {
                center_warn!("Category sync for message {} failed: {}", id, err);
            }
            let _ = event_tx.send(EngineEvent::CategorySynced { id, result });
        }
    }
}
