use super::*;

#[test]
fn sidebar_starts_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert_eq!(state.menu_label(), "Toggle navigation menu");
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    assert_eq!(state.menu_label(), "Close navigation menu");
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn close_sidebar_reports_previous_state() {
    let mut state = UiState { sidebar_open: true };
    assert!(state.close_sidebar());
    assert!(!state.close_sidebar());
    assert!(!state.sidebar_open);
}
