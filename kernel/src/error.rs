//! Typed kernel errors.
//!
//! Every kernel constructor and checked operator fails closed with a
//! [`KernelError`]. Construction errors are raised immediately and are never
//! deferred into search.

/// Typed failure for state, predicate, and action handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Malformed construction input: wrong arity, unknown predicate name,
    /// empty names, ragged grids, mismatched goal dimensions.
    InvalidArgument { detail: String },
    /// A state whose shape violates a domain invariant (support chains that
    /// do not reach the table, duplicate or missing blank tiles).
    InvalidState { detail: String },
    /// An action applied where it cannot legally be applied.
    IllegalMove { detail: String },
}

impl KernelError {
    pub(crate) fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState {
            detail: detail.into(),
        }
    }

    pub(crate) fn illegal_move(detail: impl Into<String>) -> Self {
        Self::IllegalMove {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { detail } => write!(f, "invalid argument: {detail}"),
            Self::InvalidState { detail } => write!(f, "invalid state: {detail}"),
            Self::IllegalMove { detail } => write!(f, "illegal move: {detail}"),
        }
    }
}

impl std::error::Error for KernelError {}
