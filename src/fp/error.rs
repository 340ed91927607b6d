use std::fmt;

/// Errors surfaced by the mining entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum MiningError {
    /// Minimum support resolved to zero or lies outside `(0, 1]` for fractions.
    InvalidMinSupport { value: String },
    /// `max_len` of zero can never yield an itemset.
    InvalidMaxLen,
    Encode(EncodeError),
}

/// Errors raised by [`crate::TransactionEncoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    UnknownItem { transaction: usize, item: String },
    ShapeMismatch { expected: usize, found: usize },
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiningError::InvalidMinSupport { value } => {
                write!(f, "Invalid minimum support: {} (must be positive)", value)
            }
            MiningError::InvalidMaxLen => write!(f, "Invalid max_len: must be at least 1"),
            MiningError::Encode(err) => write!(f, "Encoding failed: {}", err),
        }
    }
}

impl std::error::Error for MiningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MiningError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EncodeError> for MiningError {
    fn from(err: EncodeError) -> Self {
        MiningError::Encode(err)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownItem { transaction, item } => {
                write!(f, "Unknown item {} in transaction {}", item, transaction)
            }
            EncodeError::ShapeMismatch { expected, found } => {
                write!(f, "Shape mismatch: expected {} columns, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
