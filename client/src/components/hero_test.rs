use super::*;

#[test]
fn particles_stay_in_bounds() {
    for i in 0..HERO_PARTICLE_COUNT {
        let p = hero_particle(i);
        assert!((4..=12).contains(&p.size), "size {} at {i}", p.size);
        assert!(p.left < 100 && p.top < 100);
        assert!(p.delay < 40);
    }
}

#[test]
fn particle_layout_is_deterministic() {
    assert_eq!(hero_particle(7), hero_particle(7));
}

#[test]
fn particles_are_not_stacked() {
    let positions: std::collections::HashSet<_> =
        (0..HERO_PARTICLE_COUNT).map(|i| (hero_particle(i).left, hero_particle(i).top)).collect();
    assert!(positions.len() > HERO_PARTICLE_COUNT * 3 / 4);
}

#[test]
fn particles_drift_with_pointer_by_index() {
    assert_eq!(particle_drift(0, 100.0, -50.0), (-2.0, 1.0));
    assert_eq!(particle_drift(1, 100.0, -50.0), (0.0, 0.0));
    assert_eq!(particle_drift(2, 100.0, -50.0), (2.0, -1.0));
    assert_eq!(particle_drift(5, 100.0, -50.0), particle_drift(2, 100.0, -50.0));
}

#[test]
fn centered_pointer_leaves_particles_in_place() {
    for i in 0..HERO_PARTICLE_COUNT {
        let (x, y) = particle_drift(i, 0.0, 0.0);
        assert_eq!(format!("{x:.1}px {y:.1}px"), "0.0px 0.0px");
    }
}

#[test]
fn pointer_offset_starts_centered_without_a_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let offset = use_pointer_offset(NodeRef::new());
        assert_eq!(offset.get_untracked(), (0.0, 0.0));
    });
}
