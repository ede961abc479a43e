use super::*;

#[test]
fn request_defaults() {
    let req = ToastRequest::new("Hello");
    assert_eq!(req.title, "Hello");
    assert_eq!(req.description, None);
    assert_eq!(req.kind, ToastKind::Default);
    assert_eq!(req.duration, DEFAULT_TOAST_DURATION);
}

#[test]
fn request_builders_set_fields() {
    let req = ToastRequest::error("Something went wrong")
        .description("Please try again later.")
        .duration(Duration::ZERO);
    assert_eq!(req.kind, ToastKind::Error);
    assert_eq!(req.description.as_deref(), Some("Please try again later."));
    assert_eq!(req.duration, Duration::ZERO);
    assert_eq!(ToastRequest::success("ok").kind, ToastKind::Success);
}

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastRequest::new("first"));
    let b = state.push(ToastRequest::new("second"));

    assert_ne!(a, b);
    assert_eq!(state.len(), 2);
    assert_eq!(state.toasts[0].title, "first");
    assert_eq!(state.toasts[1].title, "second");
    assert_eq!(state.get(b).map(|t| t.title.as_str()), Some("second"));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastRequest::new("first"));
    let b = state.push(ToastRequest::new("second"));

    assert!(state.dismiss(a));
    assert_eq!(state.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    let a = state.push(ToastRequest::new("only"));
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert!(state.is_empty());
}

#[test]
fn kind_modifiers_are_distinct() {
    let kinds = [ToastKind::Default, ToastKind::Success, ToastKind::Error, ToastKind::Warning];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a.modifier(), b.modifier());
        }
    }
}
