//! Contact-form hand-off to the visitor's mail client.
//!
//! Client-side (hydrate): waits briefly so the "Sending..." state is visible,
//! then navigates to a prefilled `mailto:` URL. No network request is made.
//! Server-side (SSR) and native tests: the hand-off reports `Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ContactError` so the form can keep its fields and
//! surface a toast instead of panicking.

#![allow(clippy::unused_async)]

use std::time::Duration;

use crate::content::profile::PROFILE;
use crate::state::contact::ContactMessage;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Pause before opening the mail client.
pub const HANDOFF_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// No browser window to navigate (SSR, worker, tests).
    #[error("mail client hand-off is unavailable here")]
    Unavailable,

    /// The browser refused the `mailto:` navigation.
    #[error("could not open mail client: {0}")]
    Navigation(String),
}

/// Subject line for a contact message.
pub fn subject(message: &ContactMessage) -> String {
    format!("Portfolio Contact: {}", message.name)
}

/// Plain-text body for a contact message.
pub fn body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
        message.name, message.email, message.message
    )
}

/// Build the prefilled `mailto:` URL addressed to `recipient`.
pub fn mailto_url(recipient: &str, message: &ContactMessage) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(&subject(message)),
        encode_component(&body(message)),
    )
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_component(raw: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

/// Open the visitor's mail client with the message prefilled.
///
/// # Errors
///
/// Returns [`ContactError`] when there is no browser window or navigation
/// to the `mailto:` URL is rejected.
pub async fn send_contact_email(message: &ContactMessage) -> Result<(), ContactError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(HANDOFF_DELAY).await;
        let url = mailto_url(PROFILE.email, message);
        let window = web_sys::window().ok_or(ContactError::Unavailable)?;
        window
            .location()
            .set_href(&url)
            .map_err(|e| ContactError::Navigation(format!("{e:?}")))?;
        leptos::logging::log!("contact message handed to mail client");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, PROFILE.email);
        Err(ContactError::Unavailable)
    }
}
