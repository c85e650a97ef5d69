use euclid::{Point2D, Vector2D as EuclidVector};

use super::ExternalPoint;
use crate::Vector2D;

impl<U> ExternalPoint for Point2D<f64, U> {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Point2D::new(x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<U> ExternalPoint for Point2D<f32, U> {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Point2D::new(x as f32, y as f32)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl<U> ExternalPoint for EuclidVector<f64, U> {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        EuclidVector::new(x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<U> From<Point2D<f64, U>> for Vector2D {
    fn from(point: Point2D<f64, U>) -> Self {
        Vector2D::from_external(&point)
    }
}

impl<U> From<Vector2D> for Point2D<f64, U> {
    fn from(vector: Vector2D) -> Self {
        vector.to_external()
    }
}

impl<U> From<Point2D<f32, U>> for Vector2D {
    fn from(point: Point2D<f32, U>) -> Self {
        Vector2D::from_external(&point)
    }
}

impl<U> From<Vector2D> for Point2D<f32, U> {
    fn from(vector: Vector2D) -> Self {
        vector.to_external()
    }
}

impl<U> From<EuclidVector<f64, U>> for Vector2D {
    fn from(vector: EuclidVector<f64, U>) -> Self {
        Vector2D::from_external(&vector)
    }
}

impl<U> From<Vector2D> for EuclidVector<f64, U> {
    fn from(vector: Vector2D) -> Self {
        vector.to_external()
    }
}
