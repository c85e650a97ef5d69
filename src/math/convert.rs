use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::Vector2D;
use crate::error::{Vector2DError, Vector2DResult};

/// A vector that may be absent.
///
/// `Vector2D` has no reserved "nil" value; optional vectors are spelled out
/// with `Option` instead.
pub type NullableVector2D = Option<Vector2D>;

impl Vector2D {
    /// Cast into an array with x and y.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn from_array([x, y]: [f64; 2]) -> Self {
        Vector2D::new(x, y)
    }

    /// Cast into a tuple with x and y.
    #[inline]
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Builds a vector from a slice holding exactly two components.
    pub fn from_slice(components: &[f64]) -> Vector2DResult<Self> {
        match *components {
            [x, y] => Ok(Vector2D::new(x, y)),
            _ => Err(Vector2DError::InvalidLength {
                expected: 2,
                found: components.len(),
            }),
        }
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(vector: Vector2D) -> Self {
        vector.to_array()
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(array: [f64; 2]) -> Self {
        Vector2D::from_array(array)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(vector: Vector2D) -> Self {
        vector.to_tuple()
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = Vector2DError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Vector2D::from_slice(components)
    }
}

impl TryFrom<Vec<f64>> for Vector2D {
    type Error = Vector2DError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Vector2D::from_slice(&components)
    }
}

/// Formats as `(x, y)`. Formatting flags (precision, width, sign, ...) apply to
/// each component.
impl Display for Vector2D {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        Display::fmt(&self.x, formatter)?;
        formatter.write_str(", ")?;
        Display::fmt(&self.y, formatter)?;
        formatter.write_str(")")
    }
}

/// Parses `x, y`, optionally wrapped in parentheses or brackets.
impl FromStr for Vector2D {
    type Err = Vector2DError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = strip_delimiters(trimmed, '(', ')')
            .or_else(|| strip_delimiters(trimmed, '[', ']'))
            .unwrap_or(trimmed);

        let components = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|e| Vector2DError::Parse(format!("component `{part}`: {e}")))
            })
            .collect::<Vector2DResult<Vec<_>>>()?;

        Vector2D::from_slice(&components).map_err(|_| {
            Vector2DError::Parse(format!(
                "expected two comma-separated components in `{trimmed}`"
            ))
        })
    }
}

fn strip_delimiters(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn array_round_trip() {
        for v in [
            Vector2D::new(1., 2.),
            Vector2D::new(-0.5, 1e300),
            Vector2D::new(f64::INFINITY, -0.),
        ] {
            assert_eq!(v.to_array(), [v.x, v.y]);
            assert_eq!(Vector2D::from_array(v.to_array()), v);
        }
    }

    #[test]
    fn std_conversions() {
        let v: Vector2D = [3., 4.].into();
        assert_eq!(v, Vector2D::new(3., 4.));
        let v: Vector2D = (5., 6.).into();
        assert_eq!(v, Vector2D::new(5., 6.));

        let array: [f64; 2] = v.into();
        assert_eq!(array, [5., 6.]);
        let tuple: (f64, f64) = v.into();
        assert_eq!(tuple, (5., 6.));
    }

    #[test]
    fn slice_conversion_checks_length() {
        assert_eq!(
            Vector2D::try_from(&[1., 2.][..]),
            Ok(Vector2D::new(1., 2.))
        );
        assert_eq!(
            Vector2D::try_from(vec![1., 2., 3.]),
            Err(Vector2DError::InvalidLength {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Vector2D::from_slice(&[]),
            Err(Vector2DError::InvalidLength {
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Vector2D::new(1., -2.5).to_string(), "(1, -2.5)");
        assert_eq!(format!("{:.2}", Vector2D::new(1., 2. / 3.)), "(1.00, 0.67)");
        assert_eq!(format!("{:+}", Vector2D::new(1., -2.5)), "(+1, -2.5)");
        assert_eq!(format!("{:>4}", Vector2D::new(1., 2.)), "(   1,    2)");
        assert_eq!(format!("{:<6.1}|", Vector2D::new(0.3, -3.)), "(0.3   , -3.0  )|");
    }

    #[test]
    fn parse() {
        assert_eq!("1, 2".parse::<Vector2D>(), Ok(Vector2D::new(1., 2.)));
        assert_eq!(" (3.5,-4) ".parse::<Vector2D>(), Ok(Vector2D::new(3.5, -4.)));
        assert_eq!("[1e3, 0]".parse::<Vector2D>(), Ok(Vector2D::new(1000., 0.)));

        let v = Vector2D::new(0.1, -123.456);
        assert_eq!(v.to_string().parse::<Vector2D>(), Ok(v));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "1, 2, 3".parse::<Vector2D>(),
            Err(Vector2DError::Parse(_))
        ));
        assert!(matches!(
            "(1; 2)".parse::<Vector2D>(),
            Err(Vector2DError::Parse(_))
        ));
        assert!(matches!("".parse::<Vector2D>(), Err(Vector2DError::Parse(_))));
        assert!(matches!(
            "(x, 2)".parse::<Vector2D>(),
            Err(Vector2DError::Parse(message)) if message.contains('x')
        ));
    }

    #[test]
    fn nullable_is_option() {
        let nil: NullableVector2D = None;
        assert_eq!(nil.unwrap_or_default(), Vector2D::zero());

        let some: NullableVector2D = Some(Vector2D::UNIT_X);
        assert_eq!(some.map(Vector2D::invert), Some(Vector2D::new(-1., 0.)));
    }
}
