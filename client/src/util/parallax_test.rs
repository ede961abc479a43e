use super::*;

#[test]
fn defaults_move_up_slowly() {
    let options = ParallaxOptions::default();
    assert_eq!(options.speed, 0.1);
    assert_eq!(options.direction, ParallaxDirection::Up);
    assert!(!options.reverse);
    assert_eq!(parallax_transform(100.0, options), "translateY(-10px)");
}

#[test]
fn each_direction_maps_to_axis_and_sign() {
    let base = ParallaxOptions::default().speed(0.5);
    assert_eq!(parallax_transform(40.0, base.direction(ParallaxDirection::Up)), "translateY(-20px)");
    assert_eq!(parallax_transform(40.0, base.direction(ParallaxDirection::Down)), "translateY(20px)");
    assert_eq!(parallax_transform(40.0, base.direction(ParallaxDirection::Left)), "translateX(-20px)");
    assert_eq!(parallax_transform(40.0, base.direction(ParallaxDirection::Right)), "translateX(20px)");
}

#[test]
fn reverse_flips_sign() {
    let options = ParallaxOptions::default().reverse(true);
    assert_eq!(parallax_value(100.0, options), -10.0);
    assert_eq!(parallax_transform(100.0, options), "translateY(10px)");
}

#[test]
fn zero_offset_is_identity() {
    assert_eq!(parallax_value(0.0, ParallaxOptions::default()), 0.0);
    assert_eq!(parallax_transform(0.0, ParallaxOptions::default()), "translateY(0px)");
}

#[test]
fn use_parallax_starts_at_page_top() {
    let owner = Owner::new();
    owner.with(|| {
        let transform = use_parallax(ParallaxOptions::default().direction(ParallaxDirection::Down));
        assert_eq!(transform.get_untracked(), "translateY(0px)");
    });
}
