//! Planning domain contract trait.

use waypoint_kernel::carrier::key::StateKey;
use waypoint_kernel::KernelError;

/// One outgoing transition produced by a successor generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    /// The action that leads to `state`.
    pub action: A,
    /// The state after applying `action`.
    pub state: S,
    /// Step cost (positive; 1 in both bundled domains).
    pub cost: i64,
}

/// Trait for domains the search engine can plan in.
///
/// The engine is domain-agnostic: everything it knows about a domain comes
/// through this trait.
///
/// # Contract
///
/// - All methods take `&self` and must not mutate any state they are given.
/// - `successors` must be deterministic: the same state yields the same
///   successors in the same order. Order only affects tie-breaking among
///   equal-f nodes.
/// - `state_key` must map structurally equal states to equal keys, and is
///   the sole identity used for closed-set and best-g bookkeeping.
/// - `heuristic` must be deterministic and return 0 exactly when `is_goal`
///   holds.
pub trait PlanningDomain {
    type State: Clone + std::fmt::Debug;
    type Action: Clone + std::fmt::Debug + std::fmt::Display;
    type Goal;

    /// Stable domain identifier recorded in the search graph.
    fn domain_id(&self) -> &str;

    /// Canonical dedup key of `state`.
    fn state_key(&self, state: &Self::State) -> StateKey;

    /// Enumerate every legal action from `state` with its resulting state.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Estimated remaining cost from `state` to `goal`.
    fn heuristic(&self, state: &Self::State, goal: &Self::Goal) -> i64;

    /// Whether `state` satisfies `goal`.
    ///
    /// # Errors
    ///
    /// Returns a [`KernelError`] when `state` and `goal` cannot be compared.
    fn is_goal(&self, state: &Self::State, goal: &Self::Goal) -> Result<bool, KernelError>;

    /// Contract-checked application of `action`, used to replay plans.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::IllegalMove`] if `action` is not applicable.
    fn apply(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, KernelError>;

    /// Pre-flight check run once before search begins.
    ///
    /// # Errors
    ///
    /// Returns a [`KernelError`] if `initial` and `goal` do not form a
    /// well-posed problem for this domain.
    fn validate_problem(&self, initial: &Self::State, goal: &Self::Goal) -> Result<(), KernelError> {
        let _ = (initial, goal);
        Ok(())
    }
}
