use crate::error::{DivideError, Result};

/// An input to [`divide`]: either already numeric or text that should
/// represent a number. Conversion happens inside `divide`, so a caller can
/// pass `"not-a-number"` and get a typed failure instead of a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
}

impl Operand {
    fn to_f64(&self) -> Result<f64> {
        match self {
            Operand::Number(n) => Ok(*n),
            Operand::Text(s) => s.parse::<f64>().map_err(|_| DivideError::InvalidInput),
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

/// Return `a / b` as an IEEE-754 double.
///
/// Both operands are converted first; a conversion failure reports
/// [`DivideError::InvalidInput`] even when the denominator would otherwise
/// be zero-like. A converted denominator equal to `0.0` (including `-0.0`)
/// reports [`DivideError::DivisionByZero`].
pub fn divide(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
    let a = a.into().to_f64()?;
    let b = b.into().to_f64()?;

    if b == 0.0 {
        return Err(DivideError::DivisionByZero);
    }

    Ok(a / b)
}
