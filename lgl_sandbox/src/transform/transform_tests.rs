use glam::{Mat4, Quat, Vec3};
use super::*;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

// ============================================================================
// Construction / matrix
// ============================================================================

#[test]
fn test_identity_basis() {
    let t = Transform::default();
    assert_eq!(t.forward(), Vec3::NEG_Z);
    assert_eq!(t.right(), Vec3::X);
    assert_eq!(t.up(), Vec3::Y);
    assert_eq!(t.matrix(), Mat4::IDENTITY);
}

#[test]
fn test_matrix_is_trs() {
    let t = Transform::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::splat(2.0),
    );
    let expected = Mat4::from_translation(t.position)
        * Mat4::from_quat(t.rotation)
        * Mat4::from_scale(t.scale);
    assert!(t.matrix().abs_diff_eq(expected, 1e-5));
}

#[test]
fn test_new_normalizes_rotation() {
    let t = Transform::new(Vec3::ZERO, Quat::from_xyzw(0.0, 2.0, 0.0, 0.0), Vec3::ONE);
    assert!((t.rotation.length() - 1.0).abs() < 1e-6);
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_points_forward_at_target() {
    let mut t = Transform::from_position(Vec3::new(0.0, 0.0, 5.0));
    t.look_at(Vec3::new(5.0, 0.0, 5.0), Vec3::Y);
    assert!(approx_vec(t.forward(), Vec3::X));
    assert!(approx_vec(t.up(), Vec3::Y));
}

#[test]
fn test_look_at_same_point_is_noop() {
    let mut t = Transform::from_position(Vec3::ONE);
    t.look_at(Vec3::ONE, Vec3::Y);
    assert_eq!(t.rotation, Quat::IDENTITY);
}

#[test]
fn test_look_rotation_parallel_to_up_stays_orthonormal() {
    let rotation = look_rotation(Vec3::Y, Vec3::Y).unwrap();
    let forward = rotation * Vec3::NEG_Z;
    let right = rotation * Vec3::X;
    let up = rotation * Vec3::Y;
    assert!(approx_vec(forward, Vec3::Y));
    assert!(forward.dot(right).abs() < 1e-5);
    assert!(forward.dot(up).abs() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
}

#[test]
fn test_look_rotation_zero_direction() {
    assert!(look_rotation(Vec3::ZERO, Vec3::Y).is_none());
}
