use super::*;
use crate::state::toast::ToastKind;

#[test]
fn success_toast_thanks_the_visitor() {
    let toast = outcome_toast(&Ok(()));
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Message sent!");
    assert!(toast.description.is_some());
}

#[test]
fn failure_toast_asks_for_retry() {
    let toast = outcome_toast(&Err(ContactError::Navigation("blocked".to_owned())));
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.description.as_deref(), Some("Please try again later."));
}

#[test]
fn validation_toast_carries_reason() {
    let toast = validation_toast("Please enter your name.");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.description.as_deref(), Some("Please enter your name."));
}
