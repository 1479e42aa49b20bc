use thiserror::Error;

use crate::FieldType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Type mismatch: expected {expected:?}, got {found}")]
    TypeMismatch { expected: FieldType, found: &'static str },
    #[error("Value {value} overflows {target:?}")]
    Overflow { value: String, target: FieldType },
    #[error("Value has no position in key order: {0}")]
    Unrepresentable(String),
    #[error("Expected {expected} bound column(s), got {found}")]
    ColumnCount { expected: usize, found: usize },
}
