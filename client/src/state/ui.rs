//! Local UI chrome state (chat sidebar visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `room_form`) so layout controls can evolve independently of request data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visibility of the chat sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    Expanded,
    #[default]
    Collapsed,
}

/// UI state shared by the page layout and the chat widget.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar: SidebarState,
}

impl UiState {
    pub fn collapse_chat(&mut self) {
        self.sidebar = SidebarState::Collapsed;
    }

    pub fn expand_chat(&mut self) {
        self.sidebar = SidebarState::Expanded;
    }

    /// Whether the page reserves a margin for the open sidebar.
    pub fn chat_expanded(&self) -> bool {
        self.sidebar == SidebarState::Expanded
    }

    /// Whether the floating re-open button is shown.
    pub fn show_reopen_button(&self) -> bool {
        self.sidebar == SidebarState::Collapsed
    }
}
