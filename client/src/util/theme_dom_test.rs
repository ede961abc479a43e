#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn local_store_is_unavailable_off_browser() {
    let mut store = LocalPreferenceStore;
    assert_eq!(store.load(), Err(StoreError::Unavailable));
    assert_eq!(store.save(Preference::Dark), Err(StoreError::Unavailable));
}

#[test]
fn system_prefers_dark_is_false_off_browser() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_and_subscribe_are_callable_noops() {
    apply(ResolvedTheme::Light);
    apply(ResolvedTheme::Dark);
    on_system_change(|_| panic!("no change events off-browser"));
}

#[test]
fn boot_script_reads_storage_key_and_sets_both_classes() {
    let script = boot_script();
    assert!(script.contains("localStorage.getItem('portfolio-theme')"));
    assert!(script.contains("prefers-color-scheme: dark"));
    assert!(script.contains("classList.remove('light','dark')"));
    assert!(script.starts_with("(function(){"));
    assert!(script.ends_with("})();"));
}
