//! Conversions to and from the point types of other libraries.
//!
//! Every integration lives behind its own Cargo feature and only compiles when
//! that feature is enabled:
//!
//! | feature  | types |
//! |----------|-------|
//! | `euclid` | `Point2D<f64, U>`, `Point2D<f32, U>`, `Vector2D<f64, U>` |
//! | `glam`   | `DVec2`, `Vec2` |
//! | `taffy`  | `geometry::Point<f32>` |
//! | `winit`  | `dpi::LogicalPosition<f64>`, `dpi::PhysicalPosition<f64>` |
//!
//! Each adapter implements [`ExternalPoint`] and `From` in both directions.

use crate::Vector2D;

#[cfg(feature = "euclid")]
mod euclid;

#[cfg(feature = "glam")]
mod glam;

#[cfg(feature = "taffy")]
mod taffy;

#[cfg(feature = "winit")]
mod winit;

/// A foreign two-component point type.
pub trait ExternalPoint: Sized {
    fn from_xy(x: f64, y: f64) -> Self;

    fn to_xy(&self) -> (f64, f64);
}

impl ExternalPoint for Vector2D {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Vector2D::new(x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        self.to_tuple()
    }
}

impl ExternalPoint for (f64, f64) {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        (x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        *self
    }
}

#[inline]
pub fn from_external_point<P: ExternalPoint>(point: &P) -> Vector2D {
    let (x, y) = point.to_xy();
    Vector2D::new(x, y)
}

#[inline]
pub fn to_external_point<P: ExternalPoint>(vector: Vector2D) -> P {
    P::from_xy(vector.x, vector.y)
}

impl Vector2D {
    /// Same as [`from_external_point`].
    #[inline]
    pub fn from_external<P: ExternalPoint>(point: &P) -> Self {
        from_external_point(point)
    }

    /// Same as [`to_external_point`].
    #[inline]
    pub fn to_external<P: ExternalPoint>(self) -> P {
        to_external_point(self)
    }
}
