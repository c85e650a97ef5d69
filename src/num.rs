//! Glue between [`Vector2D`] and the numeric trait ecosystem, plus the scalar
//! helpers the vector code shares.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;

use crate::Vector2D;

/// Caps a cosine at `1` so that `acos` stays in its domain.
///
/// Rounding can push the dot product of two unit vectors slightly above `1`.
/// Anything else, `NaN` included, is passed through unchanged.
#[inline]
pub(crate) fn clamp_cosine<F: Float>(cosine: F) -> F {
    if cosine > F::one() {
        log::trace!("clamping cosine above 1 before acos");
        F::one()
    } else {
        cosine
    }
}

impl num_traits::Zero for Vector2D {
    #[inline]
    fn zero() -> Self {
        Vector2D::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector2D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};
    use num_traits::Zero;

    use super::*;

    #[test]
    fn clamp_cosine_only_caps_above_one() {
        assert_eq!(clamp_cosine(1.0000000000000002_f64), 1.);
        assert_eq!(clamp_cosine(0.5_f64), 0.5);
        assert_eq!(clamp_cosine(-1.5_f64), -1.5);
        assert!(clamp_cosine(f64::NAN).is_nan());
    }

    #[test]
    fn zero_trait() {
        assert_eq!(<Vector2D as Zero>::zero(), Vector2D::new(0., 0.));
        assert!(Vector2D::new(0., -0.).is_zero());
        assert!(!Vector2D::new(0., 1e-300).is_zero());
    }

    #[test]
    fn approximate_equality() {
        let a = Vector2D::new(0.1 + 0.2, 1.);
        let b = Vector2D::new(0.3, 1.);
        assert_ne!(a, b);
        assert_ulps_eq!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-15);
        assert_relative_ne!(a, Vector2D::new(0.3, 1.1));
    }
}
