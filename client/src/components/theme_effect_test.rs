use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn eight_particles_on_radius_eighty() {
    let offsets = particle_offsets(PARTICLE_COUNT, PARTICLE_RADIUS);
    assert_eq!(offsets.len(), 8);
    for (x, y) in &offsets {
        assert!(close(x.hypot(*y), 80.0));
    }
}

#[test]
fn first_particle_points_down_then_clockwise() {
    let offsets = particle_offsets(4, 10.0);
    assert!(close(offsets[0].0, 0.0) && close(offsets[0].1, 10.0));
    assert!(close(offsets[1].0, 10.0) && close(offsets[1].1, 0.0));
    assert!(close(offsets[2].0, 0.0) && close(offsets[2].1, -10.0));
    assert!(close(offsets[3].0, -10.0) && close(offsets[3].1, 0.0));
}

#[test]
fn zero_particles_is_empty() {
    assert!(particle_offsets(0, 80.0).is_empty());
}
