use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use showcase_core::{update, BrowserSettings, BrowserState, ListKind, Msg};
use showcase_engine::{hydrate_saved, load_catalog, FileStore, KeyValueStore};
use showcase_logging::{showcase_debug, showcase_info};

use super::effects::EffectRunner;
use super::ui::input::{parse_input, Input, HELP};
use super::ui::render::render;

/// Everything the dispatch loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Msg(Msg),
    Render,
    Quit,
}

#[derive(Debug, Clone)]
pub struct BrowseOptions {
    pub kind: ListKind,
    pub catalog: Option<PathBuf>,
    pub state_dir: PathBuf,
    pub export_dir: PathBuf,
    pub settings: BrowserSettings,
}

pub fn run_browser(options: BrowseOptions) -> Result<()> {
    let source = match &options.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog {path:?}"))?,
        None => options.kind.fixture(),
    };
    showcase_info!(
        "Browsing {} ({} items), saved sets in {:?}",
        options.kind,
        source.len(),
        options.state_dir
    );

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(options.state_dir.clone()));
    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>();
    let runner = EffectRunner::new(event_tx.clone(), store.clone(), options.export_dir.clone());

    let state = BrowserState::new(options.kind, source, options.settings);
    let mut session = Session::new(state, runner);
    session.dispatch(Msg::SavedRestored(hydrate_saved(
        store.as_ref(),
        options.kind.storage_key(),
    )));

    println!("{HELP}");
    print_frame(&session.frame());
    spawn_input_reader(event_tx);

    for event in event_rx {
        match event {
            SessionEvent::Msg(msg) => {
                let output = session.dispatch(msg);
                if !output.is_empty() {
                    print_frame(&output);
                }
            }
            SessionEvent::Render => print_frame(&session.frame()),
            SessionEvent::Quit => break,
        }
    }

    session.shutdown();
    showcase_info!("Browser session ended");
    Ok(())
}

/// Owns the browser state between events and routes effects.
pub struct Session {
    state: BrowserState,
    runner: EffectRunner,
}

impl Session {
    pub fn new(state: BrowserState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    /// Applies `msg` and runs its effects. Returns the lines to show: effect
    /// notices, then a fresh frame when the state changed.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<String> {
        showcase_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let mut output = self.runner.enqueue(effects);
        if was_dirty {
            output.extend(self.frame());
        }
        output
    }

    pub fn frame(&self) -> Vec<String> {
        render(&self.state.view())
    }

    pub fn shutdown(&self) {
        self.runner.shutdown();
    }
}

fn print_frame(lines: &[String]) {
    let mut out = io::stdout().lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = write!(out, "> ");
    let _ = out.flush();
}

fn spawn_input_reader(event_tx: mpsc::Sender<SessionEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let event = match parse_input(&line) {
                Ok(Input::Dispatch(msg)) => SessionEvent::Msg(msg),
                Ok(Input::Refresh) => SessionEvent::Render,
                Ok(Input::Help) => {
                    println!("{HELP}");
                    SessionEvent::Render
                }
                Ok(Input::Quit) => break,
                Err(err) => {
                    println!("{err}");
                    SessionEvent::Render
                }
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        let _ = event_tx.send(SessionEvent::Quit);
    });
}
