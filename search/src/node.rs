//! Search nodes and the frontier ordering key.

use waypoint_kernel::carrier::key::StateKey;

/// A node in one search call's arena.
///
/// Nodes are never mutated after creation. `parent_id` indexes the same
/// arena, so path reconstruction is a walk over node ids.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    /// Arena index, assigned in creation order.
    pub node_id: usize,
    /// Parent node (`None` for the root).
    pub parent_id: Option<usize>,
    /// Full immutable state at this node.
    pub state: S,
    /// Canonical key of `state`.
    pub state_key: StateKey,
    /// The action that produced this node from its parent.
    pub producing_action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated path cost from the root.
    pub g_cost: i64,
    /// Heuristic estimate to the goal.
    pub h_cost: i64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S, A> SearchNodeV1<S, A> {
    /// `f_cost = g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, tie_rank, creation_order)`.
///
/// Lower is better on every component. `tie_rank` is 0 under insertion-order
/// tie-breaking and the node depth under shallower-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub tie_rank: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.tie_rank.cmp(&other.tie_rank))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
