//! Error types for polynomial operations.

use thiserror::Error;

/// An error that can occur while building or manipulating polynomials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The coefficient array's rank doesn't match the number of variables.
    #[error("array of rank {rank} doesn't match {vars} variable(s)")]
    DimensionMismatch {
        /// The rank of the given array.
        rank: usize,

        /// The number of variables given.
        vars: usize,
    },

    /// The same variable name was given more than once.
    #[error("duplicate variable `{0}`")]
    DuplicateVariable(String),

    /// The requested operation is not supported for these operands.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// `content` (or an operation built on it) was requested for a non-integral coefficient type.
    #[error("coefficients of type `{0}` are not integers")]
    NonIntegerCoefficient(&'static str),

    /// `roots` was requested for a polynomial of more than one variable.
    #[error("can't calculate roots of a polynomial of {0} variables")]
    MultivariateRoots(usize),

    /// A malformed variable argument was given to `isolate_variable`.
    #[error("expected a variable name or a degree-1 variable polynomial with root 0, got `{0}`")]
    InvalidVariable(String),
}
