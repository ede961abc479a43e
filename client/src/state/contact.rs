//! Contact form fields and submission status.
//!
//! DESIGN
//! ======
//! Validation and status transitions are plain functions over `ContactForm`
//! so the page component only wires events, timers, and toasts.
//!
//! ERROR HANDLING
//! ==============
//! A failed hand-off keeps every field intact so the visitor can retry;
//! only a successful one clears the form.

use std::time::Duration;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// How long `Success` / `Error` stay visible before returning to `Idle`.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// Inputs and the submit button are locked while a hand-off is in flight
    /// or has just succeeded.
    pub fn locks_inputs(self) -> bool {
        matches!(self, Self::Submitting | Self::Success)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending...",
            Self::Success => "Sent Successfully",
            Self::Error => "Try Again",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// A validated message ready to hand off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: FormStatus,
    pub focused: Option<Field>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Validate the current fields and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message and leaves the status unchanged when a
    /// field is missing or the e-mail address is malformed, or when the form
    /// is locked.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, &'static str> {
        if self.status.locks_inputs() {
            return Err("Your message is already on its way.");
        }
        let message = validate(&self.name, &self.email, &self.message)?;
        self.status = FormStatus::Submitting;
        Ok(message)
    }

    /// Record a successful hand-off: clear the fields.
    pub fn succeed(&mut self) {
        *self = Self { status: FormStatus::Success, ..Self::default() };
    }

    /// Record a failed hand-off: keep the fields for a retry.
    pub fn fail(&mut self) {
        self.status = FormStatus::Error;
    }

    /// Return from `Success` / `Error` to `Idle`. Other states are untouched.
    pub fn reset_status(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }
}

/// Trim and check all three fields.
///
/// # Errors
///
/// Returns the first user-facing validation message.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactMessage, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() {
        return Err("Please enter your name.");
    }
    if email.is_empty() {
        return Err("Please enter your email address.");
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address.");
    }
    if message.is_empty() {
        return Err("Please enter a message.");
    }
    Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

/// `local@domain.tld` shape check; the mail client does the real validation.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
