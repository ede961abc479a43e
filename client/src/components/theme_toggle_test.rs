use super::*;

#[test]
fn icon_reflects_resolved_theme() {
    assert_eq!(theme_icon(ResolvedTheme::Light), "☀");
    assert_eq!(theme_icon(ResolvedTheme::Dark), "☾");
}

#[test]
fn label_names_the_next_theme() {
    assert_eq!(toggle_label(ResolvedTheme::Light, false), "Switch to dark theme");
    assert_eq!(toggle_label(ResolvedTheme::Dark, false), "Switch to light theme");
}

#[test]
fn label_while_transitioning_describes_cancel() {
    assert_eq!(toggle_label(ResolvedTheme::Dark, true), "Cancel theme animation");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn click_switches_then_cancels_during_animation() {
    let owner = Owner::new();
    owner.with(|| {
        let theme = ThemeContext::new();
        theme.initialize();

        assert!(matches!(
            toggle_theme(theme),
            Some(ToggleOutcome::Switched { resolved: ResolvedTheme::Dark, .. })
        ));
        assert_eq!(toggle_theme(theme), Some(ToggleOutcome::Cancelled));
        assert_eq!(theme.resolved(), ResolvedTheme::Dark);
        assert!(!theme.transitioning());
    });
}
