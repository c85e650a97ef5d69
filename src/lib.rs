//! A double-precision 2D vector for graphics and game code.
//!
//! [`Vector2D`] is a plain `Copy` pair of `f64` with the usual operator
//! overloads plus a set of in-place helpers that return the receiver so calls
//! can be chained:
//!
//! ```
//! use vector2d::Vector2D;
//!
//! let mut v = Vector2D::new(10., 20.) + Vector2D::new(10., 30.);
//! assert_eq!(v.length(), 2900.); // squared!
//! assert_eq!(v.magnitude().round(), 54.);
//!
//! v.mul_mut(0.5).floor();
//! assert_eq!(v, Vector2D::new(10., 25.));
//! ```
//!
//! Note that [`Vector2D::length`] is the *squared* length, while
//! [`Vector2D::magnitude`] is the Euclidean norm.
//!
//! Conversions to the point types of `euclid`, `glam`, `taffy` and `winit` are
//! available behind Cargo features of the same name, see [`interop`].

pub mod error;
pub mod interop;
pub mod math;
mod num;

pub use error::{Vector2DError, Vector2DResult};
pub use interop::{from_external_point, to_external_point, ExternalPoint};
pub use math::*;

pub use approx;

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn serializes_as_struct() {
        let v = Vector2D::new(1.5, -2.);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        assert_eq!(serde_json::from_str::<Vector2D>(&json).unwrap(), v);
    }
}
