use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_chat_collapsed() {
    let state = UiState::default();
    assert_eq!(state.sidebar, SidebarState::Collapsed);
    assert!(!state.chat_expanded());
    assert!(state.show_reopen_button());
}

// =============================================================
// Sidebar transitions
// =============================================================

#[test]
fn expand_restores_margin_and_hides_reopen_button() {
    let mut state = UiState::default();
    state.expand_chat();
    assert!(state.chat_expanded());
    assert!(!state.show_reopen_button());
}

#[test]
fn collapse_hides_margin_and_shows_reopen_button() {
    let mut state = UiState::default();
    state.expand_chat();
    state.collapse_chat();
    assert!(!state.chat_expanded());
    assert!(state.show_reopen_button());
}

#[test]
fn transitions_are_idempotent() {
    let mut state = UiState::default();
    state.collapse_chat();
    state.collapse_chat();
    assert_eq!(state.sidebar, SidebarState::Collapsed);
    state.expand_chat();
    state.expand_chat();
    assert_eq!(state.sidebar, SidebarState::Expanded);
}
