use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use showcase_core::{Effect, Msg};
use showcase_engine::{persist_saved, write_export, Debouncer, KeyValueStore};
use showcase_logging::{showcase_debug, showcase_error, showcase_info};

use super::app::SessionEvent;

/// Performs the effects `update` asks for. Timers report back through the
/// message channel; everything else completes inline.
pub struct EffectRunner {
    event_tx: mpsc::Sender<SessionEvent>,
    debouncer: Debouncer,
    store: Arc<dyn KeyValueStore>,
    export_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        event_tx: mpsc::Sender<SessionEvent>,
        store: Arc<dyn KeyValueStore>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            event_tx,
            debouncer: Debouncer::new(),
            store,
            export_dir,
        }
    }

    /// Runs `effects` in order and returns status lines worth showing.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::ScheduleQueryCommit { generation, delay } => {
                    showcase_debug!("ScheduleQueryCommit generation={} delay={:?}", generation, delay);
                    let event_tx = self.event_tx.clone();
                    self.debouncer.schedule(generation, delay, move |generation| {
                        let _ = event_tx.send(SessionEvent::Msg(Msg::QueryDebounceElapsed {
                            generation,
                        }));
                    });
                }
                Effect::PersistSaved { key, saved } => {
                    persist_saved(self.store.as_ref(), key, &saved);
                }
                Effect::WriteExport {
                    file_name,
                    contents,
                } => match write_export(&self.export_dir, file_name, &contents) {
                    Ok(path) => {
                        showcase_info!("Exported {} bytes to {:?}", contents.len(), path);
                        notices.push(format!("Exported to {}", path.display()));
                    }
                    Err(err) => {
                        showcase_error!("Export to {:?} failed: {}", self.export_dir, err);
                        notices.push(format!("Export failed: {err}"));
                    }
                },
            }
        }
        notices
    }

    pub fn shutdown(&self) {
        self.debouncer.cancel();
    }
}
