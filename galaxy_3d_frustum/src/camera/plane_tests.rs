use glam::{Vec3, Vec4};
use crate::error::Error;
use super::*;

// ============================================================================
// Construction / set
// ============================================================================

#[test]
fn test_plane_default_is_zero() {
    let plane = Plane::default();
    assert_eq!(plane, Plane::ZERO);
    assert_eq!(plane.evaluate(Vec3::new(3.0, -2.0, 1.0)), 0.0);
}

#[test]
fn test_plane_set_overwrites_all_coefficients() {
    let mut plane = Plane::new(1.0, 2.0, 3.0, 4.0);
    plane.set(-5.0, 6.0, -7.0, 8.0);

    assert_eq!(plane.a(), -5.0);
    assert_eq!(plane.b(), 6.0);
    assert_eq!(plane.c(), -7.0);
    assert_eq!(plane.d(), 8.0);
}

#[test]
fn test_plane_from_vec4_round_trips() {
    let v = Vec4::new(0.0, 1.0, 0.0, -2.5);
    assert_eq!(Plane::from_vec4(v).as_vec4(), v);
}

// ============================================================================
// normalize
// ============================================================================

#[test]
fn test_normalize_yields_unit_normal() {
    let mut plane = Plane::new(3.0, 0.0, 4.0, 10.0);
    assert!(plane.normalize());

    assert!((plane.normal().length() - 1.0).abs() < 1e-6);
    assert!((plane.a() - 0.6).abs() < 1e-6);
    assert!((plane.c() - 0.8).abs() < 1e-6);
    assert!((plane.d() - 2.0).abs() < 1e-6);
}

#[test]
fn test_normalized_plane_evaluates_signed_distance() {
    // y = 2 plane, facing +Y, scaled by 5
    let mut plane = Plane::new(0.0, 5.0, 0.0, -10.0);
    plane.normalize();

    assert!((plane.evaluate(Vec3::new(7.0, 5.0, -3.0)) - 3.0).abs() < 1e-6);
    assert!((plane.evaluate(Vec3::new(0.0, -1.0, 0.0)) + 3.0).abs() < 1e-6);
}

#[test]
fn test_normalize_degenerate_plane_is_left_unchanged() {
    let mut plane = Plane::new(0.0, 0.0, 0.0, 5.0);
    assert!(!plane.normalize());
    assert_eq!(plane, Plane::new(0.0, 0.0, 0.0, 5.0));

    let mut tiny = Plane::new(1e-9, 0.0, 0.0, 1.0);
    assert!(!tiny.normalize());
    assert_eq!(tiny.a(), 1e-9);
}

#[test]
fn test_normalize_nan_normal_does_not_panic() {
    let mut plane = Plane::new(f32::NAN, 0.0, 0.0, 1.0);
    assert!(!plane.normalize());
}

#[test]
fn test_try_normalize_reports_degenerate_plane() {
    let mut plane = Plane::ZERO;
    match plane.try_normalize() {
        Err(Error::DegeneratePlane(msg)) => assert!(msg.contains("normal length")),
        other => panic!("expected DegeneratePlane, got {:?}", other),
    }

    let mut ok = Plane::new(0.0, 0.0, 2.0, 0.0);
    assert!(ok.try_normalize().is_ok());
    assert_eq!(ok.normal(), Vec3::Z);
}

// ============================================================================
// evaluate
// ============================================================================

#[test]
fn test_evaluate_matches_equation() {
    let plane = Plane::new(1.0, -2.0, 0.5, 3.0);
    assert_eq!(plane.evaluate_xyz(2.0, 1.0, 4.0), 2.0 - 2.0 + 2.0 + 3.0);
    assert_eq!(plane.evaluate(Vec3::new(2.0, 1.0, 4.0)), plane.evaluate_xyz(2.0, 1.0, 4.0));
}

#[test]
fn test_plane_is_sixteen_bytes() {
    assert_eq!(std::mem::size_of::<Plane>(), 16);
    let plane = Plane::new(1.0, 2.0, 3.0, 4.0);
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&plane));
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
}
