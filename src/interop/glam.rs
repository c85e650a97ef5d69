use glam::{DVec2, Vec2};

use super::ExternalPoint;
use crate::Vector2D;

impl ExternalPoint for DVec2 {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        DVec2::new(x, y)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl ExternalPoint for Vec2 {
    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        Vec2::new(x as f32, y as f32)
    }

    #[inline]
    fn to_xy(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Vector2D::from_external(&v)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.to_external()
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Vector2D::from_external(&v)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        v.to_external()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dvec2_agrees_on_geometry() {
        let a = Vector2D::new(3., -1.);
        let b = Vector2D::new(0.5, 2.);
        let (ga, gb) = (DVec2::from(a), DVec2::from(b));

        assert_eq!(a.dot(b), ga.dot(gb));
        assert_eq!(a.cross(b), ga.perp_dot(gb));
        assert_eq!(Vector2D::from(ga + gb), a + b);
    }

    #[test]
    fn vec2_narrows() {
        let v = Vector2D::new(1.5, -0.25);
        let narrow: Vec2 = v.into();
        assert_eq!(narrow, Vec2::new(1.5, -0.25));
        assert_eq!(Vector2D::from(narrow), v);
    }
}
