use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Generation value meaning "nothing scheduled".
const IDLE: u64 = 0;

/// Delayed callbacks where scheduling a new generation cancels older ones.
///
/// Each call to [`Debouncer::schedule`] records its generation as the latest;
/// a timer only fires if its generation is still the latest when it wakes.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, generation: u64, delay: Duration, fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.latest.store(generation, Ordering::SeqCst);
        let latest = Arc::clone(&self.latest);
        thread::spawn(move || {
            thread::sleep(delay);
            if latest
                .compare_exchange(generation, IDLE, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                fire(generation);
            }
        });
    }

    /// Drops whatever is pending.
    pub fn cancel(&self) {
        self.latest.store(IDLE, Ordering::SeqCst);
    }

    pub fn is_pending(&self) -> bool {
        self.latest.load(Ordering::SeqCst) != IDLE
    }
}
