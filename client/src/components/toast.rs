//! Toast provider and bottom-right notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Toasts` wraps the `RwSignal<ToastState>` provided by `App`. Components
//! call `show` and never touch timers; auto-dismissal is scheduled here.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::toast::{Toast, ToastRequest, ToastState};

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Copy handle to the shared toast list.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    pub fn provide() -> Self {
        let toasts = Self { state: RwSignal::new(ToastState::default()) };
        provide_context(toasts);
        toasts
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Show a toast and schedule its dismissal if it has a duration.
    pub fn show(self, request: ToastRequest) -> Uuid {
        let duration = request.duration;
        let id = self.state.try_update(|s| s.push(request)).unwrap_or_else(Uuid::nil);

        #[cfg(feature = "hydrate")]
        if !duration.is_zero() {
            let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || {
                self.dismiss(id);
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = duration;

        id
    }

    pub fn dismiss(self, id: Uuid) {
        // The signal may already be disposed if the timer outlives the app.
        let _ = self.state.try_update(|s| s.dismiss(id));
    }

    pub fn snapshot(self) -> Vec<Toast> {
        self.state.with(|s| s.toasts.clone())
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = Toasts::expect();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.snapshot()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.modifier())>
                            <div class="toast__body">
                                <h3 class="toast__title">{toast.title}</h3>
                                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
