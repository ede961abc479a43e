//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a thin route target that arranges sections from
//! `components`; none of them own state.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
