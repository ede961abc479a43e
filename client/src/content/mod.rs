//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components render from these constants; nothing here is fetched
//! or mutated at runtime.

pub mod profile;
pub mod projects;


/// A top-level route shown in the sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/about", label: "About" },
    NavLink { path: "/projects", label: "Projects" },
    NavLink { path: "/experience", label: "Experience" },
    NavLink { path: "/contact", label: "Contact" },
];

/// `true` when `current` is the route `link` points at.
pub fn is_active(link: &NavLink, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    let target = link.path.trim_end_matches('/');
    current == target
}
