use core::f32::consts::TAU;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use rand::Rng;

use crate::error::{GeometryError, Result};
use crate::math::utils::random_range;
use crate::shapes::Rect;

/// A 2D vector of `f32` components.
///
/// Angles are always measured in radians, counter-clockwise from the positive
/// x-axis, unless the method name says `degrees`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn null() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub const fn splat(s: f32) -> Self {
        Self::new(s, s)
    }

    /// Unit vector making `angle` radians with the x-axis.
    #[inline]
    pub fn from_radians(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn from_degrees(angle: f32) -> Self {
        Self::from_radians(angle.to_radians())
    }

    /// Polar constructor: `(magnitude * cos(angle), magnitude * sin(angle))`.
    #[inline]
    pub fn from_magnitude_angle(magnitude: f32, angle: f32) -> Self {
        Self::from_radians(angle) * magnitude
    }

    /// A vector of the given length pointing in a uniformly random direction.
    pub fn random(rng: &mut impl Rng, magnitude: f32) -> Self {
        Self::from_magnitude_angle(magnitude, random_range(rng, 0.0, TAU))
    }

    /// A uniformly random point inside `rect`, boundary included.
    pub fn random_in(rng: &mut impl Rng, rect: &Rect) -> Self {
        rect.random_point(rng)
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).magnitude()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).magnitude_squared()
    }

    #[inline]
    pub fn manhattan(self, other: Self) -> f32 {
        let d = (other - self).abs();
        d.x + d.y
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of `self` and `other`.
    #[inline]
    pub fn perp(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Rotated a quarter turn counter-clockwise; not normalized.
    #[inline]
    pub fn orthogonal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NullVector`] for the zero vector.
    pub fn unit(self) -> Result<Self> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(GeometryError::NullVector);
        }
        Ok(self / m)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NullVector`] for the zero vector.
    pub fn orthonormal(self) -> Result<Self> {
        self.orthogonal().unit()
    }

    /// Same direction, length `magnitude`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NullVector`] for the zero vector, which has no
    /// direction to keep.
    pub fn scaled_to(self, magnitude: f32) -> Result<Self> {
        Ok(self.unit()? * magnitude)
    }

    /// Linear interpolation towards `target`. `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        self + (target - self) * t
    }

    /// Projection of `self` onto `axis`. The axis need not be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NullVector`] if `axis` is the zero vector.
    pub fn projection(self, axis: Self) -> Result<Self> {
        if axis.is_null() {
            return Err(GeometryError::NullVector);
        }
        Ok(axis * (axis.dot(self) / axis.dot(axis)))
    }

    /// Splits `self` into `(normal, tangent)` relative to `axis`, where the
    /// tangent is parallel to the axis and `normal + tangent == self`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NullVector`] if `axis` is the zero vector.
    pub fn components(self, axis: Self) -> Result<(Self, Self)> {
        let tangent = self.projection(axis)?;
        Ok((self - tangent, tangent))
    }

    /// Angle with the positive x-axis in `(-pi, pi]`. The zero vector has
    /// angle 0.
    #[inline]
    pub fn radians(self) -> f32 {
        if self.is_null() {
            return 0.0;
        }
        self.y.atan2(self.x)
    }

    /// Angle with the positive x-axis in `[0, 2pi)`.
    #[inline]
    pub fn positive_radians(self) -> f32 {
        self.radians().rem_euclid(TAU)
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.radians().to_degrees()
    }

    /// Signed angle from `self` to `other`.
    #[inline]
    pub fn radians_to(self, other: Self) -> f32 {
        other.radians() - self.radians()
    }

    #[inline]
    pub fn degrees_to(self, other: Self) -> f32 {
        other.degrees() - self.degrees()
    }

    /// Rotated counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Each component rounded to `digits` decimal places. Negative `digits`
    /// round to tens, hundreds, and so on.
    #[inline]
    pub fn rounded(self, digits: i32) -> Self {
        Self::new(round_to(self.x, digits), round_to(self.y, digits))
    }

    #[inline]
    pub const fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y)
    }

    #[inline]
    pub const fn with_y(self, y: f32) -> Self {
        Self::new(self.x, y)
    }

    #[inline]
    pub const fn to_tuple(self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Scalar division that refuses a zero divisor. The `/` operator instead
    /// follows IEEE-754 and yields infinities or NaN.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `scalar` is zero.
    pub fn checked_div(self, scalar: f32) -> Result<Self> {
        if scalar == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self / scalar)
    }
}

/// Rounds `value` to `digits` decimal places. Values with no representable
/// digit that far out are already as rounded as `f32` allows and come back
/// unchanged; a scale below the smallest `f32` rounds everything to zero.
pub(crate) fn round_to(value: f32, digits: i32) -> f32 {
    let factor = 10f32.powi(digits);
    if factor == 0.0 {
        return 0.0;
    }
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f32, f32) {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_tuple()
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

// Componentwise (Hadamard) product.
impl Mul for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl MulAssign<f32> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Div for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl DivAssign<f32> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::null(), Add::add)
    }
}

impl<'a> Sum<&'a Vector> for Vector {
    fn sum<I: Iterator<Item = &'a Vector>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
