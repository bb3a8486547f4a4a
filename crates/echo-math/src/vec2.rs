// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar::{self, EPSILON, RAD2DEG};

/// 2D float32 vector.
///
/// * Equality (`==`) is approximate: components may differ by at most
///   [`EPSILON`]. Use [`Vec2::equals`] to widen the tolerance.
/// * Nothing is guarded against degenerate input. Normalising the zero vector
///   or dividing by a zero component yields `NaN`/`inf` components.
/// * The default value is the zero vector, so `core::mem::take` leaves a
///   zeroed vector behind.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 2]", into = "[f32; 2]")
)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::RIGHT;
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::UP;

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Component at `idx`; any index other than 0 or 1 reads as `0.0`.
    pub fn component(&self, idx: usize) -> f32 {
        self.data.get(idx).copied().unwrap_or(0.0)
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Component-wise quotient. Zero components are not guarded.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(self.x() / other.x(), self.y() / other.y())
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(self.x() / scalar, self.y() / scalar)
    }

    /// Divides `numerator` by every component: `(n / x, n / y)`.
    ///
    /// This is what `scalar / vector` means; it is not the reciprocal of
    /// [`Vec2::div_scalar`].
    pub fn div_from(&self, numerator: f32) -> Self {
        Self::new(numerator / self.x(), numerator / self.y())
    }

    /// Component-wise comparison within `epsilon`.
    pub fn equals(&self, other: &Self, epsilon: f32) -> bool {
        scalar::equals(self.x(), other.x(), epsilon) && scalar::equals(self.y(), other.y(), epsilon)
    }

    /// Orders two vectors by squared magnitude.
    ///
    /// Magnitudes within [`EPSILON`] compare as `Equal`. This says nothing
    /// about direction; `(1, 0)` and `(0, 1)` are `Equal`.
    pub fn compare_by_magnitude(&self, other: &Self) -> Ordering {
        let lhs = self.magnitude_squared();
        let rhs = other.magnitude_squared();
        if scalar::nearly_equal(lhs, rhs) {
            Ordering::Equal
        } else if lhs < rhs {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// `true` when `self` is strictly shorter than `other`.
    pub fn is_shorter_than(&self, other: &Self) -> bool {
        self.compare_by_magnitude(other) == Ordering::Less
    }

    /// `true` when `self` is strictly longer than `other`.
    pub fn is_longer_than(&self, other: &Self) -> bool {
        self.compare_by_magnitude(other) == Ordering::Greater
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length; avoids the square root.
    pub fn magnitude_squared(&self) -> f32 {
        Self::dot(self, self)
    }

    /// Alias for [`Vec2::magnitude`].
    pub fn length(&self) -> f32 {
        self.magnitude()
    }

    /// Alias for [`Vec2::magnitude_squared`].
    pub fn length_squared(&self) -> f32 {
        self.magnitude_squared()
    }

    /// Returns a copy divided by its magnitude.
    ///
    /// The zero vector yields `(NaN, NaN)`.
    pub fn normalized(&self) -> Self {
        self.div_scalar(self.magnitude())
    }

    /// Normalises in place. See [`Vec2::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Signed angle from `lhs` to `rhs` in degrees, in `(-180, 180]`.
    ///
    /// Negative when `rhs` is clockwise of `lhs` (`cross < 0`). `NaN` if either
    /// input is the zero vector.
    pub fn angle(lhs: &Self, rhs: &Self) -> f32 {
        let angle = Self::abs_angle(lhs, rhs);
        if Self::cross(lhs, rhs) < 0.0 {
            -angle
        } else {
            angle
        }
    }

    /// Unsigned angle between `lhs` and `rhs` in degrees, in `[0, 180]`.
    pub fn abs_angle(lhs: &Self, rhs: &Self) -> f32 {
        let dot = scalar::clamp(Self::dot(&lhs.normalized(), &rhs.normalized()), -1.0, 1.0);
        dot.acos() * RAD2DEG
    }

    /// Z component of the 3D cross product; positive when `rhs` is
    /// counter-clockwise of `lhs`.
    pub fn cross(lhs: &Self, rhs: &Self) -> f32 {
        lhs.x() * rhs.y() - lhs.y() * rhs.x()
    }

    /// Distance between two points.
    pub fn distance(lhs: &Self, rhs: &Self) -> f32 {
        lhs.sub(rhs).magnitude()
    }

    /// Dot product.
    pub fn dot(lhs: &Self, rhs: &Self) -> f32 {
        lhs.x() * rhs.x() + lhs.y() * rhs.y()
    }

    /// Unclamped linear interpolation.
    ///
    /// Evaluated as `start * (1 - t) + end * t` so that `t = 0` and `t = 1`
    /// return the endpoints bit-for-bit.
    pub fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        start.scale(1.0 - t) + end.scale(t)
    }

    /// Component-wise product of `v` and `factors`.
    pub fn scaled(v: &Self, factors: &Self) -> Self {
        v.mul(factors)
    }

    /// Spherical interpolation from `start` toward `end`.
    ///
    /// Computes `theta = acos(clamp(dot(start, end), -1, 1)) * t` and returns
    /// `start * cos(theta) + (end - start * dot) * sin(theta)`. The inputs are
    /// used as given; only unit-length inputs trace a true great-circle arc.
    /// Existing callers rely on the exact numbers this produces for
    /// non-unit input, so the formula must stay as written.
    pub fn slerp(start: &Self, end: &Self, t: f32) -> Self {
        let dot = scalar::clamp(Self::dot(start, end), -1.0, 1.0);
        let theta = dot.acos() * t;
        let relative = end.sub(&start.scale(dot));
        let (sin_theta, cos_theta) = theta.sin_cos();
        start.scale(cos_theta) + relative.scale(sin_theta)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        self.data.get(idx).unwrap_or(&0.0)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x(), self.y())
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2::add(&self, &rhs)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2::sub(&self, &rhs)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Vec2::mul(&self, &rhs)
    }
}

impl Div for Vec2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Vec2::div(&self, &rhs)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scale(self)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl Div<Vec2> for f32 {
    type Output = Vec2;
    fn div(self, rhs: Vec2) -> Vec2 {
        rhs.div_from(self)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec2 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
