use taffy::geometry::Point;

use super::ExternalPoint;
use crate::Vector2D;

impl ExternalPoint for Point<f32> {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Point {
            x: x as f32,
            y: y as f32,
        }
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl From<Point<f32>> for Vector2D {
    fn from(value: Point<f32>) -> Self {
        Vector2D::from_external(&value)
    }
}

impl From<Vector2D> for Point<f32> {
    fn from(value: Vector2D) -> Self {
        value.to_external()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_point_round_trip() {
        let point = Point { x: 12.5_f32, y: -3. };
        let v = Vector2D::from(point);
        assert_eq!(v, Vector2D::new(12.5, -3.));

        let back: Point<f32> = v.into();
        assert_eq!(back, point);
    }
}
