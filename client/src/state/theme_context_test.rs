#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{Preference, TransitionId};

fn with_owner(f: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn new_context_is_uninitialized_light() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        assert!(!ctx.is_initialized());
        assert_eq!(ctx.resolved(), ResolvedTheme::Light);
        assert!(!ctx.transitioning());
    });
}

#[test]
fn initialize_off_browser_follows_system_light() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        ctx.initialize();
        ctx.initialize();
        assert!(ctx.is_initialized());
        assert_eq!(
            ctx.state(),
            ThemeState { preference: Preference::System, resolved: ResolvedTheme::Light, transitioning: false }
        );
    });
}

#[test]
fn toggle_through_context_switches_then_cancels() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        ctx.initialize();

        assert_eq!(
            ctx.toggle(),
            Some(ToggleOutcome::Switched { id: TransitionId(1), resolved: ResolvedTheme::Dark })
        );
        assert!(ctx.transitioning());
        assert_eq!(ctx.toggle(), Some(ToggleOutcome::Cancelled));
        assert!(!ctx.transitioning());
        assert_eq!(ctx.resolved(), ResolvedTheme::Dark);
    });
}

#[test]
fn provided_context_is_reachable_from_descendants() {
    with_owner(|| {
        let ctx = ThemeContext::provide();
        ctx.initialize();
        let found = ThemeContext::expect();
        assert!(found.is_initialized());
    });
}
