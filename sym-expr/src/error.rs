//! Error types for expression and relation operations.

use thiserror::Error;

/// An error that can occur while building or manipulating expressions and relations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// An abstract node type was instantiated directly.
    ///
    /// Expression nodes are a closed set of enum variants, so this cannot actually happen through
    /// the public API; the variant exists to keep the full error taxonomy representable.
    #[error("abstract expression nodes cannot be instantiated directly")]
    Instantiation,

    /// The requested operation is not supported for these operands.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A symbol outside the known operator / relation tables was used.
    #[error("unsupported symbol `{0}`")]
    UnsupportedSymbol(String),
}
