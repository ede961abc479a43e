use super::*;

#[test]
fn default_fade_starts_below_and_transparent() {
    let reveal = Reveal::default();
    assert_eq!(
        reveal.style(false),
        "opacity: 0; transform: translate(0px, 20px) scale(1); \
         transition: opacity 0.5s ease-out 0s, transform 0.5s ease-out 0s;"
    );
    assert_eq!(
        reveal.style(true),
        "opacity: 1; transform: translate(0px, 0px) scale(1); \
         transition: opacity 0.5s ease-out 0s, transform 0.5s ease-out 0s;"
    );
}

#[test]
fn directions_start_on_opposite_side() {
    assert_eq!(RevealDirection::Up.start_offset(20.0), (0.0, 20.0));
    assert_eq!(RevealDirection::Down.start_offset(20.0), (0.0, -20.0));
    assert_eq!(RevealDirection::Left.start_offset(20.0), (20.0, 0.0));
    assert_eq!(RevealDirection::Right.start_offset(20.0), (-20.0, 0.0));
}

#[test]
fn scale_variant_shrinks_while_hidden() {
    let style = Reveal::scale_in().style(false);
    assert!(style.contains("scale(0.95)"), "{style}");
    assert!(Reveal::scale_in().style(true).contains("scale(1)"));
}

#[test]
fn none_variant_keeps_full_opacity() {
    let reveal = Reveal { variant: RevealVariant::None, ..Reveal::default() };
    assert!(reveal.style(false).starts_with("opacity: 1;"));
}

#[test]
fn delay_is_never_negative() {
    assert_eq!(Reveal::default().delay(-1.0).delay, 0.0);
    assert!(Reveal::slide_up().delay(0.2).style(true).contains("ease-out 0.2s"));
}

#[test]
fn stagger_adds_per_index_delay() {
    let base = Reveal::slide_up().delay(0.5);
    assert_eq!(base.staggered(0, 0.25).delay, 0.5);
    assert_eq!(base.staggered(2, 0.25).delay, 1.0);
}
