use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use center_core::{Effect, Msg, TemplateStore};
use center_engine::{EngineEvent, EngineEvents, EngineHandle};
use center_logging::{center_info, center_warn};
use clipboard_rs::{Clipboard, ClipboardContext};

use super::app::AppEvent;

/// Executes core effects against the engine, the template store and the
/// system clipboard, and pumps engine events back into the update loop.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Box<dyn TemplateStore>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: EngineEvents,
        store: Box<dyn TemplateStore>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        spawn_event_loop(events, event_tx.clone());
        Self {
            engine,
            store,
            event_tx,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartRefresh => {
                    center_info!("StartRefresh");
                    self.engine.refresh_all();
                }
                Effect::SyncCategory { id, category } => {
                    center_info!("SyncCategory id={} category={}", id, category);
                    self.engine.sync_category(id, category);
                }
                Effect::PersistTemplates { snapshot } => {
                    self.store.save(&snapshot);
                }
                Effect::CopyToClipboard { text } => {
                    if let Err(error) = copy_to_clipboard(text) {
                        center_warn!("Clipboard write failed: {}", error);
                        let _ = self
                            .event_tx
                            .send(AppEvent::Core(Msg::ClipboardFailed { error }));
                    }
                }
            }
        }
    }
}

fn copy_to_clipboard(text: String) -> Result<(), String> {
    let ctx = ClipboardContext::new().map_err(|err| err.to_string())?;
    ctx.set_text(text).map_err(|err| err.to_string())
}

fn spawn_event_loop(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        if let Some(event) = events.try_recv() {
            let msg = match event {
                EngineEvent::RefreshFinished { result: Ok(outcome) } => Msg::RefreshCompleted {
                    messages: outcome.messages,
                    feeds: outcome.feeds,
                    refreshed_at: outcome.refreshed_at,
                },
                EngineEvent::RefreshFinished { result: Err(err) } => Msg::RefreshFailed {
                    error: err.to_string(),
                },
                EngineEvent::CategorySynced { id, result } => Msg::CategorySynced {
                    id,
                    error: result.err().map(|err| err.to_string()),
                },
            };
            if event_tx.send(AppEvent::Core(msg)).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}
