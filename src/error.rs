use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Vector2 needs exactly 2 components, got a sequence of length {len}")]
    InvalidConstruction { len: usize },

    #[error("Expected an operand of type `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Sequence operand must be of length 2, got length {len}")]
    InvalidOperand { len: usize },

    #[error("Must round to an integer number of decimal places, got '{digits}'")]
    InvalidArgument { digits: f64 },

    #[error("This Vector2 instance is immutable")]
    ImmutableMutation,

    #[error("Angle '{angle}' is out of range (valid: -PI..PI)")]
    InvalidAngle { angle: f64 },

    #[error("Cannot compute an angle with a zero length vector")]
    ZeroLengthVector,

    #[error("Max angle '{max}' is smaller than min angle '{min}'")]
    InvalidRange { min: f64, max: f64 },
}
