//! Typed search errors.
//!
//! `NoSolution` is the only expected failure of a search call. Everything
//! else is a caller contract violation surfaced before or during the goal
//! test, never a partial plan.

use waypoint_kernel::KernelError;

/// Typed failure of [`crate::search::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier was exhausted without reaching the goal.
    NoSolution {
        /// Nodes expanded before exhaustion.
        expansions: u64,
    },
    /// The problem is malformed for its domain (e.g. puzzle boards of
    /// different dimensions).
    InvalidProblem(KernelError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSolution { expansions } => {
                write!(f, "no solution found after {expansions} expansions")
            }
            Self::InvalidProblem(e) => write!(f, "invalid problem: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoSolution { .. } => None,
            Self::InvalidProblem(e) => Some(e),
        }
    }
}

impl From<KernelError> for SearchError {
    fn from(e: KernelError) -> Self {
        Self::InvalidProblem(e)
    }
}
