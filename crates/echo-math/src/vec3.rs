// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar::{self, EPSILON};
use crate::Vec2;

/// 3D float32 vector.
///
/// * Components may represent points or directions depending on the caller.
/// * Equality (`==`) is approximate, component-wise within [`EPSILON`].
/// * Degenerate input is not guarded; see [`Vec3::normalized`].
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 3]", into = "[f32; 3]")
)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::RIGHT;
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::UP;
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::FORWARD;

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Widens a [`Vec2`] with an explicit `z`.
    pub fn from_vec2(v: Vec2, z: f32) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
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

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component at `idx`; indices past 2 read as `0.0`.
    pub fn component(&self, idx: usize) -> f32 {
        self.data.get(idx).copied().unwrap_or(0.0)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }

    /// Component-wise quotient. Zero components are not guarded.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(
            self.x() / other.x(),
            self.y() / other.y(),
            self.z() / other.z(),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(self.x() / scalar, self.y() / scalar, self.z() / scalar)
    }

    /// `(n / x, n / y, n / z)`; the meaning of `scalar / vector`.
    pub fn div_from(&self, numerator: f32) -> Self {
        Self::new(
            numerator / self.x(),
            numerator / self.y(),
            numerator / self.z(),
        )
    }

    /// Component-wise comparison within `epsilon`.
    ///
    /// Every component is compared by absolute difference, so the test is
    /// symmetric in `self` and `other`.
    pub fn equals(&self, other: &Self, epsilon: f32) -> bool {
        scalar::equals(self.x(), other.x(), epsilon)
            && scalar::equals(self.y(), other.y(), epsilon)
            && scalar::equals(self.z(), other.z(), epsilon)
    }

    /// Orders two vectors by squared magnitude; within [`EPSILON`] is `Equal`.
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

    /// Vector length (magnitude).
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn magnitude_squared(&self) -> f32 {
        Self::dot(self, self)
    }

    /// Alias for [`Vec3::magnitude`].
    pub fn length(&self) -> f32 {
        self.magnitude()
    }

    /// Alias for [`Vec3::magnitude_squared`].
    pub fn length_squared(&self) -> f32 {
        self.magnitude_squared()
    }

    /// Returns a copy divided by its magnitude.
    ///
    /// There is no degeneracy threshold: the zero vector divides by zero and
    /// comes back as `(NaN, NaN, NaN)`.
    pub fn normalized(&self) -> Self {
        self.div_scalar(self.magnitude())
    }

    /// Normalises in place.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Cross product `lhs × rhs`.
    pub fn cross(lhs: &Self, rhs: &Self) -> Self {
        let (ax, ay, az) = (lhs.x(), lhs.y(), lhs.z());
        let (bx, by, bz) = (rhs.x(), rhs.y(), rhs.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Distance between two points.
    pub fn distance(lhs: &Self, rhs: &Self) -> f32 {
        lhs.sub(rhs).magnitude()
    }

    /// Dot product.
    pub fn dot(lhs: &Self, rhs: &Self) -> f32 {
        lhs.x() * rhs.x() + lhs.y() * rhs.y() + lhs.z() * rhs.z()
    }

    /// Unclamped linear interpolation, exact at `t = 0` and `t = 1`.
    pub fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        start.scale(1.0 - t) + end.scale(t)
    }

    /// Component-wise product of `v` and `factors`.
    pub fn scaled(v: &Self, factors: &Self) -> Self {
        v.mul(factors)
    }

    /// Spherical interpolation from `start` toward `end`.
    ///
    /// The angle is measured between the normalised inputs and the arc
    /// direction `end - start * dot` is normalised, but `start` itself is used
    /// as given. Parallel or anti-parallel inputs leave the arc direction
    /// undefined (a zero vector is normalised) and produce `NaN` components.
    pub fn slerp(start: &Self, end: &Self, t: f32) -> Self {
        let dot = scalar::clamp(
            Self::dot(&start.normalized(), &end.normalized()),
            -1.0,
            1.0,
        );
        let theta = dot.acos() * t;
        let relative = end.sub(&start.scale(dot)).normalized();
        let (sin_theta, cos_theta) = theta.sin_cos();
        start.scale(cos_theta) + relative.scale(sin_theta)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

/// Zero-extends a [`Vec2`] (`z = 0`).
impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        Self::from_vec2(value, 0.0)
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, EPSILON)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        self.data.get(idx).unwrap_or(&0.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x(), self.y(), self.z())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Vec3::mul(&self, &rhs)
    }
}

impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Vec3::div(&self, &rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl Div<Vec3> for f32 {
    type Output = Vec3;
    fn div(self, rhs: Vec3) -> Vec3 {
        rhs.div_from(self)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec3 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
