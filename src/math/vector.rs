use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::clamp_cosine;

/// A point or displacement in the plane, stored as two `f64` components.
///
/// `Vector2D` is a plain `Copy` value: every copy is independent and the
/// in-place operations (the ones taking `&mut self`) only ever touch the
/// receiver. Most of them hand the receiver back so calls can be chained:
///
/// ```
/// use vector2d::Vector2D;
///
/// let mut v = Vector2D::new(1.4, -2.6);
/// v.round().abs();
/// assert_eq!(v, Vector2D::new(1., 3.));
/// ```
///
/// Components follow IEEE-754 rules throughout. Nothing forbids `NaN` or
/// infinities and arithmetic propagates them instead of failing, so a vector
/// holding a `NaN` component never compares equal to itself.
///
/// There is no internal synchronization. Sharing a vector between threads for
/// reading is fine, mutating one instance from several threads is up to the
/// caller to coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2D {
    /// The `x` (traditionally, horizontal) coordinate.
    pub x: f64,
    /// The `y` (traditionally, vertical) coordinate.
    pub y: f64,
}

impl Vector2D {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0., 0.);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1., 1.);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1., 0.);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0., 1.);

    /// Constructor taking scalar values directly.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Constructor, setting all components to zero.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Constructor setting all components to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Vector2D { x: v, y: v }
    }

    /// Constructor taking a magnitude and an angle in radians.
    #[inline]
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let mut v = Self::ZERO;
        v.polar(magnitude, angle);
        v
    }

    /// Overwrites both components.
    ///
    /// When `y` is `None` both components are set to `x`.
    ///
    /// ```
    /// use vector2d::Vector2D;
    ///
    /// let mut v = Vector2D::zero();
    /// assert_eq!(*v.set(3., 4.), Vector2D::new(3., 4.));
    /// assert_eq!(*v.set(7., None), Vector2D::splat(7.));
    /// ```
    #[inline]
    pub fn set(&mut self, x: f64, y: impl Into<Option<f64>>) -> &mut Self {
        self.x = x;
        self.y = y.into().unwrap_or(x);
        self
    }

    /// Copies the components of `source` into `self`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.x = source.x;
        self.y = source.y;
        self
    }

    #[inline]
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Vector2D::new(f(self.x), f(self.y))
    }

    #[inline]
    fn apply(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        *self = self.map(f);
        self
    }

    /// Rounds both components to the nearest integer, in place.
    ///
    /// Ties round away from zero, as [`f64::round`] does: `0.5` becomes `1`
    /// and `-0.5` becomes `-1`.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.apply(f64::round)
    }

    /// Rounds both components down, in place.
    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        self.apply(f64::floor)
    }

    /// Rounds both components up, in place.
    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        self.apply(f64::ceil)
    }

    /// Replaces both components with their absolute value, in place.
    #[inline]
    pub fn abs(&mut self) -> &mut Self {
        self.apply(f64::abs)
    }

    /// Returns the **squared** length, `x² + y²`.
    ///
    /// Use [`magnitude`](Self::magnitude) for the Euclidean norm.
    #[inline]
    pub fn length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales both components by `value / self.length()`.
    ///
    /// A zero vector cannot be rescaled: it is left untouched and `0.0` is
    /// returned. Otherwise `value` is returned.
    pub fn set_length(&mut self, value: f64) -> f64 {
        let length = self.length();
        if length == 0. {
            log::trace!("ignoring set_length({value}) on a zero-length vector");
            return 0.;
        }

        *self *= value / length;
        value
    }

    /// Returns the Euclidean norm, `sqrt(x² + y²)`.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.length().sqrt()
    }

    /// Changes the norm while keeping the direction.
    ///
    /// A zero vector has an angle of `0`, so it ends up pointing along `+x`.
    #[inline]
    pub fn set_magnitude(&mut self, magnitude: f64) -> &mut Self {
        let angle = self.angle();
        self.polar(magnitude, angle)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the norm of the cross product [self.x, self.y, 0] x [other.x, other.y, 0].
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector with length of one unit.
    ///
    /// Normalizing a zero vector divides by zero and yields `NaN` components.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Returns the vector with length of one unit.
    ///
    /// Unlike [`Vector2D::normalize`](#method.normalize), this returns None in the case that the
    /// length of the vector is zero.
    #[inline]
    #[must_use]
    pub fn try_normalize(self) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            None
        } else {
            Some(self / magnitude)
        }
    }

    /// Scalar projection of `self` onto `axis`.
    ///
    /// Projecting onto a zero axis yields `NaN`.
    #[inline]
    pub fn projection(self, axis: Self) -> f64 {
        self.dot(axis.normalize())
    }

    /// Returns the signed angle between this vector and the x axis.
    /// Positive values counted counterclockwise, where 0 is `+x` axis, `PI/2`
    /// is `+y` axis.
    ///
    /// The returned angle is between -PI and PI.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the signed angle from this vector to `other`, in `[-PI, PI]`.
    ///
    /// The cosine of the angle is clamped to `1` before taking its arc cosine,
    /// so nearly parallel vectors give `0` instead of `NaN`. The sign is
    /// negative when `other` is clockwise from `self`.
    pub fn angle_to(self, other: Self) -> f64 {
        let angle = clamp_cosine(self.normalize().dot(other.normalize())).acos();

        if self.cross(other) < 0. {
            -angle
        } else {
            angle
        }
    }

    /// Sets the components from a magnitude and an angle in radians.
    #[inline]
    pub fn polar(&mut self, magnitude: f64, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        self.x = magnitude * cos;
        self.y = magnitude * sin;
        self
    }

    /// Returns true if `other` lies strictly closer than `range`.
    #[inline]
    pub fn in_range(self, other: Self, range: f64) -> bool {
        self.distance_squared(other) < range * range
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolate each component between this vector and another vector.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Vector2D::new(-self.y, self.x)
    }

    /// Returns true if all members are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns true if any member is `NaN`.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Componentwise minimum with `other`, in place.
    ///
    /// A `NaN` component loses against a number, as with [`f64::min`].
    #[inline]
    pub fn min(&mut self, other: Self) -> &mut Self {
        *self = Self::min_of(*self, other);
        self
    }

    /// Componentwise maximum with `other`, in place.
    ///
    /// A `NaN` component loses against a number, as with [`f64::max`].
    #[inline]
    pub fn max(&mut self, other: Self) -> &mut Self {
        *self = Self::max_of(*self, other);
        self
    }

    /// Returns the vector each component of which are minimum of `a` and `b`.
    #[inline]
    pub fn min_of(a: Self, b: Self) -> Self {
        Vector2D::new(a.x.min(b.x), a.y.min(b.y))
    }

    /// Returns the vector each component of which are maximum of `a` and `b`.
    #[inline]
    pub fn max_of(a: Self, b: Self) -> Self {
        Vector2D::new(a.x.max(b.x), a.y.max(b.y))
    }

    #[inline]
    pub fn invert_x(&mut self) {
        self.x = -self.x;
    }

    #[inline]
    pub fn invert_y(&mut self) {
        self.y = -self.y;
    }

    /// Negates both components in place.
    #[inline]
    pub fn invert_assign(&mut self) -> &mut Self {
        self.invert_x();
        self.invert_y();
        self
    }

    /// Returns a negated copy. Same as unary `-`.
    #[inline]
    #[must_use]
    pub fn invert(self) -> Self {
        -self
    }

}
