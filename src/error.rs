use thiserror::Error;

/// Errors raised by the fallible conversions into [`Vector2D`](crate::Vector2D).
///
/// Arithmetic never fails; division by zero and friends follow IEEE-754 and
/// produce infinities or `NaN` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Vector2DError {
    /// A sequence did not hold exactly as many components as a vector needs.
    #[error("expected {expected} components, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Text could not be read as a vector.
    #[error("invalid vector literal: {0}")]
    Parse(String),
}

pub type Vector2DResult<T> = Result<T, Vector2DError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Vector2DError::InvalidLength {
            expected: 2,
            found: 5,
        };
        assert_eq!(err.to_string(), "expected 2 components, found 5");

        let err = Vector2DError::Parse("component `q`".to_string());
        assert!(err.to_string().contains("invalid vector literal"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vector2DError>();
    }
}
