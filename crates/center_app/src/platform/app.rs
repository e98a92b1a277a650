use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use center_core::{update, AppState, Msg, TemplateStore};
use center_engine::{ClientSettings, EngineConfig, EngineHandle};
use chrono::Utc;

use super::console;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence::RonTemplateStore;

/// Events feeding the update loop: core messages from effects/engine and
/// raw operator input lines.
pub(crate) enum AppEvent {
    Core(Msg),
    Input(String),
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let base_url =
        std::env::var("CENTER_API_URL").unwrap_or_else(|_| "http://localhost:8000/".to_string());
    let base_url = url::Url::parse(&base_url).context("invalid CENTER_API_URL")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let config = EngineConfig {
        base_url,
        settings: ClientSettings::default(),
        now_utc: Arc::new(|| Utc::now().to_rfc3339()),
    };
    let (engine, events) = EngineHandle::new(config)?;

    let store = RonTemplateStore::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let restored = store.load();
    let runner = EffectRunner::new(engine, events, Box::new(store), event_tx.clone());

    let mut state = AppState::new();
    if let Some(snapshot) = restored {
        state = dispatch(state, Msg::TemplatesRestored(snapshot), &runner);
    }
    state = dispatch(state, Msg::RefreshRequested, &runner);
    if state.consume_dirty() {
        console::render(&state.view());
    }

    spawn_input_thread(event_tx);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Core(msg) => {
                state = dispatch(state, msg, &runner);
            }
            AppEvent::Input(line) => match console::parse(&line, &state) {
                console::Command::Quit => break,
                console::Command::Help => console::print_help(),
                console::Command::Dispatch(msgs) => {
                    for msg in msgs {
                        state = dispatch(state, msg, &runner);
                    }
                }
                console::Command::Unknown(text) => {
                    println!("Unrecognized command: {text} (try 'help')");
                }
            },
        }
        if state.consume_dirty() {
            console::render(&state.view());
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn spawn_input_thread(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                break;
            }
        }
    });
}
