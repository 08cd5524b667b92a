use std::sync::mpsc;
use std::time::Duration;

use showcase_core::{update, BrowserState, Effect, Msg};
use showcase_engine::Debouncer;

const DELAY: Duration = Duration::from_millis(40);
const WAIT: Duration = Duration::from_millis(500);

#[test]
fn only_the_latest_schedule_fires() {
    let debouncer = Debouncer::new();
    let (tx, rx) = mpsc::channel();

    for generation in 1..=3 {
        let tx = tx.clone();
        debouncer.schedule(generation, DELAY, move |g| {
            let _ = tx.send(g);
        });
    }

    assert_eq!(rx.recv_timeout(WAIT), Ok(3));
    assert!(rx.recv_timeout(DELAY * 3).is_err());
    assert!(!debouncer.is_pending());
}

#[test]
fn cancel_drops_pending_timer() {
    let debouncer = Debouncer::new();
    let (tx, rx) = mpsc::channel::<u64>();
    debouncer.schedule(7, DELAY, move |g| {
        let _ = tx.send(g);
    });
    assert!(debouncer.is_pending());
    debouncer.cancel();
    assert!(rx.recv_timeout(DELAY * 4).is_err());
}

#[test]
fn typing_burst_settles_on_final_query_once() {
    let debouncer = Debouncer::new();
    let (tx, rx) = mpsc::channel::<Msg>();
    let mut state = BrowserState::default();

    for raw in ["r", "re", "rea", "react"] {
        let (next, effects) = update(state, Msg::QueryEdited(raw.to_string()));
        state = next;
        for effect in effects {
            if let Effect::ScheduleQueryCommit { generation, delay } = effect {
                let tx = tx.clone();
                debouncer.schedule(generation, delay.min(DELAY), move |generation| {
                    let _ = tx.send(Msg::QueryDebounceElapsed { generation });
                });
            }
        }
    }

    let fired = rx.recv_timeout(WAIT).expect("commit fires");
    assert!(rx.recv_timeout(DELAY * 3).is_err());
    let (state, _) = update(state, fired);
    assert_eq!(state.applied_query(), "react");
    assert_eq!(state.view().total_matches, 1);
}
