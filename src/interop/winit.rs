use winit::dpi::{LogicalPosition, PhysicalPosition};

use super::ExternalPoint;
use crate::Vector2D;

impl ExternalPoint for LogicalPosition<f64> {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        LogicalPosition::new(x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl ExternalPoint for PhysicalPosition<f64> {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        PhysicalPosition::new(x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<LogicalPosition<f64>> for Vector2D {
    fn from(value: LogicalPosition<f64>) -> Self {
        Vector2D::from_external(&value)
    }
}

impl From<Vector2D> for LogicalPosition<f64> {
    fn from(value: Vector2D) -> Self {
        value.to_external()
    }
}

impl From<PhysicalPosition<f64>> for Vector2D {
    fn from(value: PhysicalPosition<f64>) -> Self {
        Vector2D::from_external(&value)
    }
}

impl From<Vector2D> for PhysicalPosition<f64> {
    fn from(value: Vector2D) -> Self {
        value.to_external()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_position_round_trip() {
        let position = LogicalPosition::new(640_f64, 360.5);
        let v = Vector2D::from(position);
        assert_eq!(v, Vector2D::new(640., 360.5));
        assert_eq!(LogicalPosition::<f64>::from(v), position);
    }

    #[test]
    fn physical_position_scales() {
        let logical = Vector2D::from(LogicalPosition::new(10_f64, 20.));
        let physical: PhysicalPosition<f64> = (logical * 2.).into();
        assert_eq!(physical, PhysicalPosition::new(20., 40.));
    }
}
