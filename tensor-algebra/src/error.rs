use thiserror::Error;

/// Failures reported by tensor and matrix operations. Each variant carries a message describing the
/// offending shapes, axes or offsets.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// Operand shapes disagree where equality or compatibility is required.
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    /// A coordinate or flat offset lies outside the declared extents.
    #[error("Index Out of Range: {0}")]
    IndexOutOfRange(String),
    /// Illegal axis selection, negative power and similar argument errors.
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    /// Elimination found no usable pivot.
    #[error("Singular Matrix: {0}")]
    SingularMatrix(String),
}
