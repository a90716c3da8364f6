use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors raised by entity mutators.
///
/// Every variant is raised at the point of violation and the entity being
/// mutated is left untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// A required invariant was broken by the caller.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// A typed mutator received a value of the wrong kind.
    #[error("{expected} expected, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A value fell outside an enumerated domain.
    #[error("{0}")]
    InvalidArgument(String),
    /// A value could not be coerced to the required numeric type.
    #[error("cannot convert {value} to {target}")]
    TypeConversion { target: &'static str, value: String },
    /// A constrained value could not be constructed.
    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),
}

/// Convenient alias for results returned from entity mutators.
pub type ModelResult<T> = Result<T, ModelError>;
