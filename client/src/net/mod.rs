//! Outbound communication from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend API; `contact` hands messages to the visitor's
//! mail client through a `mailto:` navigation.

pub mod contact;
