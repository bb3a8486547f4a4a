// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Float32 scalar helpers shared by the vector types and the random streams.
//!
//! Everything here is a pure function. Degenerate inputs are not guarded:
//! `ln(0.0)`, `inv_lerp(a, a, v)` and friends propagate whatever IEEE-754
//! produces (`-inf`, `NaN`), and callers are expected to check finiteness if
//! they care.

use core::f32::consts::{FRAC_1_PI, FRAC_PI_2, FRAC_PI_4};

/// Archimedes' constant at float32 precision.
pub const PI: f32 = core::f32::consts::PI;

/// `PI / 2`.
pub const HALF_PI: f32 = FRAC_PI_2;

/// `PI / 4`.
pub const QUARTER_PI: f32 = FRAC_PI_4;

/// `1 / PI`.
pub const INV_PI: f32 = FRAC_1_PI;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f32 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f32 = 180.0 / PI;

/// Default tolerance for approximate comparisons.
///
/// This is the float32 machine epsilon, so comparisons using it are
/// effectively exact for values of magnitude ≥ 1. Widen it explicitly via
/// [`equals`] when comparing computed results.
pub const EPSILON: f32 = f32::EPSILON;

/// Absolute value.
pub fn abs(value: f32) -> f32 {
    value.abs()
}

/// Absolute value of an integer. Wraps for `i32::MIN`.
pub fn abs_int(value: i32) -> i32 {
    value.wrapping_abs()
}

/// Arc cosine in radians.
pub fn acos(value: f32) -> f32 {
    value.acos()
}

/// Arc sine in radians.
pub fn asin(value: f32) -> f32 {
    value.asin()
}

/// Arc tangent in radians.
pub fn atan(value: f32) -> f32 {
    value.atan()
}

/// Four-quadrant arc tangent of `y / x` in radians.
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// Smallest integer value ≥ `value`.
pub fn ceil(value: f32) -> f32 {
    value.ceil()
}

/// [`ceil`] converted to `i32` (saturating at the `i32` bounds, `NaN` → 0).
#[allow(clippy::cast_possible_truncation)]
pub fn ceil_to_int(value: f32) -> i32 {
    value.ceil() as i32
}

/// Clamps `value` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: an inverted range returns `min`
/// for values below it and `max` otherwise, and `NaN` passes through.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Cosine of an angle in radians.
pub fn cos(value: f32) -> f32 {
    value.cos()
}

/// Returns `true` when `|a - b| <= epsilon`.
pub fn equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// [`equals`] with the default [`EPSILON`].
pub fn nearly_equal(a: f32, b: f32) -> bool {
    equals(a, b, EPSILON)
}

/// `e^value`.
pub fn exp(value: f32) -> f32 {
    value.exp()
}

/// Largest integer value ≤ `value`.
pub fn floor(value: f32) -> f32 {
    value.floor()
}

/// [`floor`] converted to `i32` (saturating at the `i32` bounds, `NaN` → 0).
#[allow(clippy::cast_possible_truncation)]
pub fn floor_to_int(value: f32) -> i32 {
    value.floor() as i32
}

/// Inverse of [`lerp`]: where `value` sits between `start` and `end`.
///
/// Not clamped. `start == end` divides by zero and yields `inf`/`NaN`.
pub fn inv_lerp(start: f32, end: f32, value: f32) -> f32 {
    (value - start) / (end - start)
}

/// Linear interpolation `start + (end - start) * t`.
///
/// `t` outside `[0, 1]` extrapolates.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Natural logarithm.
pub fn ln(value: f32) -> f32 {
    value.ln()
}

/// Logarithm of `value` in an arbitrary `base`, computed as `ln(value) / ln(base)`.
pub fn log(value: f32, base: f32) -> f32 {
    value.ln() / base.ln()
}

/// Base-10 logarithm.
pub fn log10(value: f32) -> f32 {
    value.log10()
}

/// Larger of two values; returns `b` when they are unordered.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two values; returns `b` when they are unordered.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Largest element of `values`, or `None` when empty.
pub fn max_of<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |acc, &v| max(acc, v)))
}

/// Smallest element of `values`, or `None` when empty.
pub fn min_of<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |acc, &v| min(acc, v)))
}

/// Returns `-1.0`, `0.0`, or `1.0`.
///
/// Zero (of either sign) and `NaN` map to `0.0`, unlike [`f32::signum`].
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Integer counterpart of [`sign`].
pub fn sign_int(value: i32) -> i32 {
    value.signum()
}

/// Moves `current` toward `target` by at most `max_delta`.
///
/// Snaps exactly to `target` once it is within `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + sign(target - current) * max_delta
}

/// `value` raised to `power`.
pub fn pow(value: f32, power: f32) -> f32 {
    value.powf(power)
}

/// Rounds half away from zero.
pub fn round(value: f32) -> f32 {
    value.round()
}

/// [`round`] converted to `i32` (saturating at the `i32` bounds, `NaN` → 0).
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_int(value: f32) -> i32 {
    value.round() as i32
}

/// Sine of an angle in radians.
pub fn sin(value: f32) -> f32 {
    value.sin()
}

/// Cubic Hermite ease of `value` between `start` and `end`.
///
/// The normalised position is clamped to `[0, 1]` before applying
/// `3x² - 2x³`, so the result is always within `[0, 1]` for finite input.
pub fn smooth_step(start: f32, end: f32, value: f32) -> f32 {
    let x = clamp01(inv_lerp(start, end, value));
    x * x * (3.0 - 2.0 * x)
}

/// Square root.
pub fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

/// Tangent of an angle in radians.
pub fn tan(value: f32) -> f32 {
    value.tan()
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f32) -> f32 {
    radians * RAD2DEG
}

/// Converts degrees to radians.
pub fn to_radians(degrees: f32) -> f32 {
    degrees * DEG2RAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_both_sides_and_nan() {
        assert_eq!(clamp(-2.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(2.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
        assert!(clamp(f32::NAN, -1.0, 1.0).is_nan());
        assert_eq!(clamp01(1.5), 1.0);
    }

    #[test]
    fn sign_maps_zero_to_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign_int(0), 0);
        assert_eq!(sign_int(-7), -1);
    }

    #[test]
    fn move_towards_snaps_within_delta() {
        assert_eq!(move_towards(0.0, 0.5, 1.0), 0.5);
        assert_eq!(move_towards(0.0, 10.0, 1.0), 1.0);
        assert_eq!(move_towards(0.0, -10.0, 2.0), -2.0);
    }

    #[test]
    fn inv_lerp_degenerate_bounds_are_not_guarded() {
        assert!(inv_lerp(1.0, 1.0, 2.0).is_infinite());
        assert!(inv_lerp(1.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn max_min_over_slices() {
        assert_eq!(max_of(&[3, 9, -1]), Some(9));
        assert_eq!(min_of(&[3.0, 9.0, -1.0]), Some(-1.0));
        assert_eq!(max_of::<f32>(&[]), None);
    }

    #[test]
    fn rounding_to_int() {
        assert_eq!(round_to_int(2.5), 3);
        assert_eq!(round_to_int(-2.5), -3);
        assert_eq!(floor_to_int(-0.5), -1);
        assert_eq!(ceil_to_int(-0.5), 0);
    }
}
