use glam::Vec3;
use super::*;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn assert_orthonormal(s: &Spatial) {
    assert!((s.forward().length() - 1.0).abs() < 1e-5);
    assert!((s.right().length() - 1.0).abs() < 1e-5);
    assert!((s.up().length() - 1.0).abs() < 1e-5);
    assert!(s.forward().dot(s.right()).abs() < 1e-5);
    assert!(s.forward().dot(s.up()).abs() < 1e-5);
    assert!(s.right().dot(s.up()).abs() < 1e-5);
}

// ============================================================================
// Basis
// ============================================================================

#[test]
fn test_default_faces_negative_z() {
    let s = Spatial::default();
    assert_eq!(s.position(), Vec3::ZERO);
    assert!(approx_vec(s.forward(), Vec3::NEG_Z));
    assert!(approx_vec(s.right(), Vec3::X));
    assert!(approx_vec(s.up(), Vec3::Y));
}

#[test]
fn test_yaw_zero_faces_positive_x() {
    let s = Spatial::new(Vec3::ZERO, 0.0, 0.0);
    assert!(approx_vec(s.forward(), Vec3::X));
    assert!(approx_vec(s.right(), Vec3::Z));
}

#[test]
fn test_basis_stays_orthonormal() {
    let mut s = Spatial::default();
    for i in 0..50 {
        s.rotate(7.3, if i % 2 == 0 { 13.0 } else { -4.0 });
        assert_orthonormal(&s);
    }
    s.set_orientation(33.0, -20.0, 45.0);
    assert_orthonormal(&s);
}

#[test]
fn test_pitch_is_clamped() {
    let mut s = Spatial::default();
    s.rotate(0.0, 500.0);
    assert_eq!(s.pitch(), MAX_PITCH);
    s.set_orientation(0.0, -500.0, 0.0);
    assert_eq!(s.pitch(), MIN_PITCH);
    assert_orthonormal(&s);
}

#[test]
fn test_roll_turns_right_and_up_about_forward() {
    let mut s = Spatial::default();
    s.set_orientation(DEFAULT_YAW, 0.0, 90.0);
    assert!(approx_vec(s.forward(), Vec3::NEG_Z));
    assert!(approx_vec(s.up(), Vec3::X));
    assert!(approx_vec(s.right(), Vec3::NEG_Y));
}

#[test]
fn test_set_world_up_keeps_forward() {
    let mut s = Spatial::new(Vec3::ZERO, 0.0, 30.0);
    let forward = s.forward();
    s.set_world_up(Vec3::new(0.0, 0.0, 1.0));
    assert!(approx_vec(s.forward(), forward));
    assert_orthonormal(&s);

    let before = s.revision();
    s.set_world_up(Vec3::ZERO);
    assert_eq!(s.revision(), before);
}

#[test]
fn test_rotation_matches_basis() {
    let mut s = Spatial::default();
    s.set_orientation(12.0, 34.0, 5.0);
    let q = s.rotation();
    assert!(approx_vec(q * Vec3::NEG_Z, s.forward()));
    assert!(approx_vec(q * Vec3::Y, s.up()));
    assert!(approx_vec(q * Vec3::X, s.right()));
}

#[test]
fn test_model_matrix_places_origin_at_position() {
    let mut s = Spatial::default();
    s.set_position(Vec3::new(1.0, 2.0, 3.0));
    let m = s.model_matrix();
    assert!(approx_vec(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0)));
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_move_forward_moves_exact_distance() {
    let mut s = Spatial::default();
    s.set_movement_speed(100.0);
    s.move_forward(2.0);
    assert!(approx_vec(s.position(), Vec3::new(0.0, 0.0, -2.0)));
    s.move_right(1.0);
    s.move_up(0.5);
    assert!(approx_vec(s.position(), Vec3::new(1.0, 0.5, -2.0)));
}

#[test]
fn test_move_in_direction_normalizes() {
    let mut s = Spatial::default();
    s.move_in_direction(Vec3::new(0.0, 10.0, 0.0), 3.0);
    assert!(approx_vec(s.position(), Vec3::new(0.0, 3.0, 0.0)));
}

#[test]
fn test_move_in_zero_direction_is_noop() {
    let mut s = Spatial::default();
    let before = s.revision();
    s.move_in_direction(Vec3::ZERO, 3.0);
    assert_eq!(s.position(), Vec3::ZERO);
    assert_eq!(s.revision(), before);
}

#[test]
fn test_negative_movement_speed_clamps_to_zero() {
    let mut s = Spatial::default();
    s.set_movement_speed(-1.0);
    assert_eq!(s.movement_speed(), 0.0);
}

// ============================================================================
// rotate_around / follow_path / interpolate_to
// ============================================================================

#[test]
fn test_rotate_around_moves_and_turns() {
    let mut s = Spatial::new(Vec3::new(0.0, 0.0, 5.0), DEFAULT_YAW, 0.0);
    s.rotate_around(Vec3::ZERO, Vec3::Y, 90.0);
    assert!(approx_vec(s.position(), Vec3::new(5.0, 0.0, 0.0)));
    // still looking at the pivot
    assert!(approx_vec(s.forward(), Vec3::NEG_X));
    assert_orthonormal(&s);
}

#[test]
fn test_look_at_faces_target_and_clears_roll() {
    let mut s = Spatial::new(Vec3::new(0.0, 0.0, 5.0), 0.0, 0.0);
    s.set_orientation(0.0, 0.0, 30.0);
    s.look_at(Vec3::new(0.0, 5.0, 0.0));
    let expected = Vec3::new(0.0, 1.0, -1.0).normalize();
    assert!(approx_vec(s.forward(), expected));
    assert!((s.pitch() - 45.0).abs() < 1e-3);
    assert_eq!(s.roll(), 0.0);

    let before = s.revision();
    s.look_at(s.position());
    assert_eq!(s.revision(), before);
}

#[test]
fn test_rotate_around_zero_axis_is_noop() {
    let mut s = Spatial::new(Vec3::new(0.0, 0.0, 5.0), DEFAULT_YAW, 0.0);
    s.rotate_around(Vec3::ZERO, Vec3::ZERO, 90.0);
    assert_eq!(s.position(), Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn test_follow_path_midpoint_and_facing() {
    let path = [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0)];
    let mut s = Spatial::default();

    s.follow_path(&path, 0.25);
    assert!(approx_vec(s.position(), Vec3::new(5.0, 0.0, 0.0)));
    // look target is halfway along the next segment
    let expected = (Vec3::new(10.0, 0.0, 5.0) - Vec3::new(5.0, 0.0, 0.0)).normalize();
    assert!(approx_vec(s.forward(), expected));
}

#[test]
fn test_follow_path_wraps_t() {
    let path = [Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
    let mut s = Spatial::default();
    s.follow_path(&path, 1.5);
    assert!(approx_vec(s.position(), Vec3::new(2.0, 0.0, 0.0)));
    s.follow_path(&path, -0.25);
    assert!(approx_vec(s.position(), Vec3::new(3.0, 0.0, 0.0)));
}

#[test]
fn test_follow_path_degenerate_inputs() {
    let mut s = Spatial::default();
    s.follow_path(&[], 0.5);
    assert_eq!(s.position(), Vec3::ZERO);
    s.follow_path(&[Vec3::ONE], 0.5);
    assert_eq!(s.position(), Vec3::ONE);
}

#[test]
fn test_interpolate_to_endpoints_and_midpoint() {
    let mut a = Spatial::new(Vec3::ZERO, 0.0, 0.0);
    let b = Spatial::new(Vec3::new(10.0, 0.0, 0.0), 90.0, 0.0);

    let mut half = a.clone();
    half.interpolate_to(&b, 0.5);
    assert!(approx_vec(half.position(), Vec3::new(5.0, 0.0, 0.0)));
    assert!((half.yaw() - 45.0).abs() < 1e-3);

    a.interpolate_to(&b, 7.0);
    assert!(approx_vec(a.position(), b.position()));
    assert!(approx_vec(a.forward(), b.forward()));
}

#[test]
fn test_interpolate_keeps_roll() {
    let mut a = Spatial::default();
    let mut b = Spatial::default();
    b.set_orientation(DEFAULT_YAW, 0.0, 40.0);
    a.interpolate_to(&b, 1.0);
    assert!((a.roll() - 40.0).abs() < 1e-2);
    assert!(approx_vec(a.rotation() * Vec3::Y, b.rotation() * Vec3::Y));
}

// ============================================================================
// Revision
// ============================================================================

#[test]
fn test_every_mutation_bumps_revision() {
    let mut s = Spatial::default();
    let mut last = s.revision();
    let mut check = |s: &Spatial| {
        assert!(s.revision() > last);
        last = s.revision();
    };
    s.set_position(Vec3::ONE);
    check(&s);
    s.rotate(1.0, 1.0);
    check(&s);
    s.move_forward(1.0);
    check(&s);
    s.set_orientation(0.0, 0.0, 0.0);
    check(&s);
    s.rotate_around(Vec3::ZERO, Vec3::Y, 10.0);
    check(&s);
    s.set_movement_speed(2.5);
    check(&s);
}
