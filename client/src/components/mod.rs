//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Site chrome (`header`, `sidebar`, `footer`, `scroll_indicator`), theme
//! controls (`theme_toggle`, `theme_effect`), notifications (`toast`), scroll
//! reveal wrappers, and the content sections the pages compose.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod project_grid;
pub mod reveal;
pub mod scroll_indicator;
pub mod sidebar;
pub mod smooth_scroll;
pub mod theme_effect;
pub mod theme_toggle;
pub mod toast;
