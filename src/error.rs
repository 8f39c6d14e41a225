/// Errors raised by fallible matrix operations.
///
/// Shape mismatches are not represented here: they are rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A matrix expression was divided by a scalar that is zero (within epsilon for floats).
    #[error("attempt to divide a matrix by zero")]
    DivideByZero,

    /// A matrix with a determinant of zero was inverted.
    #[error("attempt to invert a singular matrix")]
    Singular,

    /// A flat buffer did not hold exactly `R * C` elements.
    #[error("expected {expected} matrix elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
