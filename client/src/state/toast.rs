//! Ephemeral notification queue.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain ordered list so push/dismiss semantics are
//! testable without a browser. `components::toast` owns the signal and
//! schedules auto-dismissal for toasts with a non-zero duration.

use std::time::Duration;

use uuid::Uuid;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Default lifetime of a toast before auto-dismissal.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// BEM modifier used by the toast stylesheet.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Default => "toast--default",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
    /// `Duration::ZERO` keeps the toast until dismissed.
    pub duration: Duration,
}

/// Builder-style request for a new toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
    pub duration: Duration,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind: ToastKind::Default,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Error)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, request: ToastRequest) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            title: request.title,
            description: request.description,
            kind: request.kind,
            duration: request.duration,
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
