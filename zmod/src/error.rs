use thiserror::Error;

/// Failure kinds of the ring engine. Every failure is synchronous and
/// fatal to the calling operation; no partial result is ever returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    #[error("modulus must be a positive integer, got {0}")]
    NonPositiveModulus(i64),

    #[error("operand moduli must be equal and positive: {lhs} != {rhs}")]
    ModulusMismatch { lhs: i64, rhs: i64 },

    #[error("operands must be of equal length: {lhs} != {rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },

    #[error("operands must be non-empty")]
    EmptyOperand,
}

impl RingError {
    /// True for failures of the modulus contract (non-positive or
    /// disagreeing moduli).
    #[inline]
    pub fn is_modulo(&self) -> bool {
        matches!(
            self,
            RingError::NonPositiveModulus(_) | RingError::ModulusMismatch { .. }
        )
    }

    /// True for failures of the operand-shape contract (length mismatch
    /// or empty operand).
    #[inline]
    pub fn is_operation(&self) -> bool {
        matches!(
            self,
            RingError::LengthMismatch { .. } | RingError::EmptyOperand
        )
    }
}
