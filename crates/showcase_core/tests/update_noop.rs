use showcase_core::{update, BrowserState, Msg};

#[test]
fn update_is_noop() {
    let state = BrowserState::default();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
