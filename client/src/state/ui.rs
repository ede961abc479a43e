//! Local UI chrome state (navigation sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the theme and content modules
//! so the header, sidebar and route changes can share one flag.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Close the sidebar. Returns `true` if it was open.
    pub fn close_sidebar(&mut self) -> bool {
        std::mem::replace(&mut self.sidebar_open, false)
    }

    pub fn menu_label(&self) -> &'static str {
        if self.sidebar_open { "Close navigation menu" } else { "Toggle navigation menu" }
    }
}
