// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::cmp::Ordering;

use echo_math::{scalar, Vec2};

fn approx_eq(a: f32, b: f32, tol: f32) {
    let diff = (a - b).abs();
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff})");
}

fn approx_vec(a: Vec2, b: Vec2, tol: f32) {
    assert!(a.equals(&b, tol), "expected {b}, got {a}");
}

#[test]
fn copy_and_take_semantics() {
    let mut v1 = Vec2::new(1.0, 2.0);
    let v2 = v1;
    let v3 = core::mem::take(&mut v1);

    assert_eq!(v1.to_array(), [0.0, 0.0]);
    assert_eq!(v2.to_array(), [1.0, 2.0]);
    assert_eq!(v3.to_array(), [1.0, 2.0]);
    assert_eq!(Vec2::default().to_array(), Vec2::ZERO.to_array());
}

#[test]
fn constructors() {
    assert_eq!(Vec2::splat(3.0).to_array(), [3.0, 3.0]);
    assert_eq!(Vec2::from([4.0, -1.0]).to_array(), [4.0, -1.0]);
    assert_eq!(<[f32; 2]>::from(Vec2::new(5.0, 6.0)), [5.0, 6.0]);
    assert_eq!(Vec2::UP.to_array(), [0.0, 1.0]);
    assert_eq!(Vec2::LEFT.to_array(), [-1.0, 0.0]);
    assert_eq!(Vec2::ONE.to_array(), [1.0, 1.0]);
}

#[test]
fn arithmetic() {
    assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0), Vec2::new(4.0, 6.0));
    assert_eq!(Vec2::new(1.0, 2.0) - Vec2::new(3.0, 4.0), Vec2::new(-2.0, -2.0));
    assert_eq!(Vec2::new(1.0, 2.0) * Vec2::new(3.0, 4.0), Vec2::new(3.0, 8.0));
    assert_eq!(
        Vec2::new(1.0, 2.0) / Vec2::new(3.0, 4.0),
        Vec2::new(1.0 / 3.0, 0.5)
    );

    assert_eq!(Vec2::new(1.0, 2.0) * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(2.0 * Vec2::new(1.0, 2.0), Vec2::new(2.0, 4.0));
    assert_eq!(Vec2::new(1.0, 2.0) / 2.0, Vec2::new(0.5, 1.0));
    // scalar / vector divides the scalar by each component.
    assert_eq!(2.0 / Vec2::new(1.0, 2.0), Vec2::new(2.0, 1.0));
    assert_eq!(-Vec2::new(1.0, -2.0), Vec2::new(-1.0, 2.0));
}

#[test]
fn named_methods_match_operators() {
    let a = Vec2::new(1.5, -2.0);
    let b = Vec2::new(-0.5, 4.0);
    assert_eq!(a.add(&b).to_array(), (a + b).to_array());
    assert_eq!(a.sub(&b).to_array(), (a - b).to_array());
    assert_eq!(a.mul(&b).to_array(), (a * b).to_array());
    assert_eq!(a.div(&b).to_array(), (a / b).to_array());
    assert_eq!(a.scale(3.0).to_array(), (a * 3.0).to_array());
    assert_eq!(Vec2::scaled(&a, &b).to_array(), (a * b).to_array());
}

#[test]
fn assign_ops() {
    let mut v = Vec2::new(1.0, 2.0);
    v += Vec2::new(1.0, 1.0);
    assert_eq!(v.to_array(), [2.0, 3.0]);
    v -= Vec2::new(0.0, 1.0);
    assert_eq!(v.to_array(), [2.0, 2.0]);
    v *= 2.0;
    assert_eq!(v.to_array(), [4.0, 4.0]);
    v *= Vec2::new(0.5, 0.25);
    assert_eq!(v.to_array(), [2.0, 1.0]);
    v /= 2.0;
    assert_eq!(v.to_array(), [1.0, 0.5]);
    v /= Vec2::new(1.0, 0.5);
    assert_eq!(v.to_array(), [1.0, 1.0]);
}

#[test]
fn division_by_zero_is_not_guarded() {
    let v = Vec2::new(1.0, 0.0) / Vec2::new(0.0, 0.0);
    assert!(v.x().is_infinite());
    assert!(v.y().is_nan());
}

#[test]
fn equality_is_approximate() {
    assert_eq!(Vec2::new(5.0, 2.0), Vec2::new(5.0, 2.0));
    assert_ne!(Vec2::new(5.0, 2.0), Vec2::new(5.0, 3.0));
    assert_ne!(Vec2::new(5.0, 2.0), Vec2::new(6.0, 2.0));
    assert_eq!(Vec2::new(2.0, 2.0), Vec2::new(4.0, 4.0) / 2.0);
    assert!(Vec2::new(1.0, 1.0).equals(&Vec2::new(1.05, 0.95), 0.1));
    assert!(!Vec2::new(1.0, 1.0).equals(&Vec2::new(1.2, 1.0), 0.1));
}

#[test]
fn indexing_out_of_range_reads_zero() {
    let v = Vec2::new(7.0, 8.0);
    assert_eq!(v[0], 7.0);
    assert_eq!(v[1], 8.0);
    assert_eq!(v[2], 0.0);
    assert_eq!(v[usize::MAX], 0.0);
    assert_eq!(v.component(5), 0.0);
}

#[test]
fn ordering_uses_magnitude_only() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(5.0, 0.0);
    assert_eq!(a.compare_by_magnitude(&b), Ordering::Equal);
    assert_ne!(a, b);
    assert!(Vec2::new(1.0, 0.0).is_shorter_than(&Vec2::new(0.0, 2.0)));
    assert!(Vec2::new(0.0, -3.0).is_longer_than(&Vec2::new(2.0, 0.0)));
    assert_eq!(
        Vec2::new(0.0, 1.0).compare_by_magnitude(&Vec2::new(1.0, 1.0)),
        Ordering::Less
    );
}

#[test]
fn magnitude() {
    assert_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vec2::new(3.0, 4.0).magnitude_squared(), 25.0);
    assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Vec2::new(3.0, 4.0).length_squared(), 25.0);
}

#[test]
fn normalize() {
    let mut v = Vec2::new(3.0, 4.0);
    v.normalize();
    assert_eq!(v, Vec2::new(0.6, 0.8));
    assert_eq!(Vec2::new(3.0, 4.0).normalized(), Vec2::new(0.6, 0.8));
}

#[test]
fn normalize_zero_vector_is_nan() {
    let n = Vec2::ZERO.normalized();
    assert!(n.x().is_nan() && n.y().is_nan());
}

#[test]
fn angle() {
    let right = Vec2::new(1.0, 0.0);
    approx_eq(Vec2::angle(&right, &Vec2::new(0.0, 1.0)), 90.0, 1e-4);
    approx_eq(Vec2::angle(&right, &Vec2::new(1.0, 0.0)), 0.0, 1e-4);
    approx_eq(Vec2::angle(&right, &Vec2::new(-1.0, 0.0)), 180.0, 1e-4);
    approx_eq(Vec2::angle(&right, &Vec2::new(0.0, -1.0)), -90.0, 1e-4);
    approx_eq(Vec2::angle(&right, &Vec2::new(1.0, 1.0)), 45.0, 1e-4);

    approx_eq(Vec2::abs_angle(&right, &Vec2::new(0.0, 1.0)), 90.0, 1e-4);
    approx_eq(Vec2::abs_angle(&right, &Vec2::new(0.0, -1.0)), 90.0, 1e-4);
    assert!(Vec2::angle(&right, &Vec2::ZERO).is_nan());
}

#[test]
fn cross() {
    let right = Vec2::new(1.0, 0.0);
    assert_eq!(Vec2::cross(&right, &Vec2::new(0.0, 1.0)), 1.0);
    assert_eq!(Vec2::cross(&right, &Vec2::new(1.0, 0.0)), 0.0);
    assert_eq!(Vec2::cross(&right, &Vec2::new(-1.0, 0.0)), 0.0);
    assert_eq!(Vec2::cross(&right, &Vec2::new(0.0, -1.0)), -1.0);
    assert_eq!(Vec2::cross(&right, &Vec2::new(1.0, 1.0)), 1.0);
}

#[test]
fn dot() {
    let right = Vec2::new(1.0, 0.0);
    assert_eq!(Vec2::dot(&right, &Vec2::new(0.0, 1.0)), 0.0);
    assert_eq!(Vec2::dot(&right, &Vec2::new(1.0, 0.0)), 1.0);
    assert_eq!(Vec2::dot(&right, &Vec2::new(-1.0, 0.0)), -1.0);
    assert_eq!(Vec2::dot(&right, &Vec2::new(0.0, -1.0)), 0.0);
    assert_eq!(Vec2::dot(&right, &Vec2::new(1.0, 1.0)), 1.0);
}

#[test]
fn distance() {
    let origin = Vec2::ZERO;
    assert_eq!(Vec2::distance(&origin, &Vec2::new(0.0, 1.0)), 1.0);
    assert_eq!(Vec2::distance(&origin, &Vec2::new(1.0, 0.0)), 1.0);
    assert_eq!(Vec2::distance(&origin, &Vec2::new(1.0, 1.0)), scalar::sqrt(2.0));
    assert_eq!(Vec2::distance(&origin, &Vec2::new(2.0, 2.0)), scalar::sqrt(8.0));
}

#[test]
fn lerp() {
    let (a, b) = (Vec2::ZERO, Vec2::ONE);
    assert_eq!(Vec2::lerp(&a, &b, 0.25), Vec2::splat(0.25));
    assert_eq!(Vec2::lerp(&a, &b, 0.5), Vec2::splat(0.5));
    assert_eq!(Vec2::lerp(&a, &b, 0.75), Vec2::splat(0.75));

    assert_eq!(Vec2::lerp(&b, &a, 0.25), Vec2::splat(0.75));
    assert_eq!(Vec2::lerp(&b, &a, 0.5), Vec2::splat(0.5));
    assert_eq!(Vec2::lerp(&b, &a, 0.75), Vec2::splat(0.25));

    // Unclamped.
    assert_eq!(Vec2::lerp(&a, &b, 2.0), Vec2::splat(2.0));
    assert_eq!(Vec2::lerp(&a, &b, -1.0), Vec2::splat(-1.0));
}

#[test]
fn slerp_from_origin() {
    let (a, b) = (Vec2::ZERO, Vec2::ONE);
    approx_vec(Vec2::slerp(&a, &b, 0.25), Vec2::splat(0.382683), 1e-5);
    approx_vec(Vec2::slerp(&a, &b, 0.5), Vec2::splat(0.707107), 1e-5);
    approx_vec(Vec2::slerp(&a, &b, 0.75), Vec2::splat(0.923880), 1e-5);
}

#[test]
fn slerp_swapped_endpoints_walk_the_same_values_backwards() {
    let (a, b) = (Vec2::ONE, Vec2::ZERO);
    approx_vec(Vec2::slerp(&a, &b, 0.25), Vec2::splat(0.923880), 1e-5);
    approx_vec(Vec2::slerp(&a, &b, 0.5), Vec2::splat(0.707107), 1e-5);
    approx_vec(Vec2::slerp(&a, &b, 0.75), Vec2::splat(0.382683), 1e-5);
}

#[test]
fn slerp_unit_vectors_follow_the_arc() {
    let mid = Vec2::slerp(&Vec2::UNIT_X, &Vec2::UNIT_Y, 0.5);
    approx_vec(mid, Vec2::splat(core::f32::consts::FRAC_1_SQRT_2), 1e-6);
    approx_eq(mid.magnitude(), 1.0, 1e-6);
}

#[test]
fn display_uses_six_decimals() {
    assert_eq!(Vec2::new(0.25, -1.0).to_string(), "(0.250000, -1.000000)");
}
