use std::time::Duration;

use super::*;

#[test]
fn show_and_dismiss_through_context() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = Toasts::provide();
        let first = toasts.show(ToastRequest::success("Sent"));
        let second = toasts.show(ToastRequest::error("Failed").duration(Duration::ZERO));

        let titles: Vec<_> = toasts.snapshot().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Sent", "Failed"]);

        toasts.dismiss(first);
        let remaining = toasts.snapshot();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);

        // Dismissing twice is harmless.
        toasts.dismiss(first);
        assert_eq!(toasts.snapshot().len(), 1);
    });
}

#[test]
fn expect_returns_provided_handle() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = Toasts::provide();
        provided.show(ToastRequest::new("Hello"));
        assert_eq!(Toasts::expect().snapshot().len(), 1);
    });
}
