use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivideError {
    /// An operand could not be converted to a number. Reported before the
    /// zero check, so a non-numeric denominator is never `DivisionByZero`.
    #[error("Inputs must be numbers")]
    InvalidInput,

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, DivideError>;
