//! `SearchGraphV1`: expansion-event audit log.
//!
//! The ordered list of [`ExpandEventV1`] entries records every decision the
//! engine made; the metadata carries aggregate counters and the outcome.
//! Two runs of the same problem under the same policy produce byte-identical
//! canonical JSON, and therefore the same digest.

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};

/// Domain prefix for search graph content hashing.
pub const DOMAIN_SEARCH_GRAPH: &[u8] = b"WAYPOINT::SEARCH_GRAPH::V1\0";

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphV1 {
    /// Ordered expansion events. Empty when the policy disables recording.
    pub expansions: Vec<ExpandEventV1>,
    /// Aggregate counters and outcome.
    pub metadata: SearchGraphMetadata,
}

/// One frontier pop that led to an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Canonical key of the expanded state.
    pub state_key: String,
    pub f_cost: i64,
    pub g_cost: i64,
    pub depth: u32,
    /// Successors returned by the domain.
    pub successors_generated: u64,
    /// Successors that became new frontier entries.
    pub pushed: u64,
    /// Successors whose key was already closed.
    pub skipped_closed: u64,
    /// Successors reached at no better cost than a previous path.
    pub skipped_not_better: u64,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    pub domain_id: String,
    pub root_state_key: String,
    /// Tie-break policy echo.
    pub tie_break: String,

    // Counters
    pub total_expansions: u64,
    pub total_successors_generated: u64,
    pub total_pushed: u64,
    pub total_skipped_closed: u64,
    pub total_skipped_not_better: u64,
    /// Pops discarded because their key was already closed.
    pub total_stale_pops: u64,
    pub nodes_created: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A goal node was popped.
    GoalReached { node_id: u64, cost: i64 },
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
}

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes under [`DOMAIN_SEARCH_GRAPH`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "f_cost": e.f_cost,
        "g_cost": e.g_cost,
        "node_id": e.node_id,
        "pushed": e.pushed,
        "skipped_closed": e.skipped_closed,
        "skipped_not_better": e.skipped_not_better,
        "state_key": e.state_key,
        "successors_generated": e.successors_generated,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "domain_id": m.domain_id,
        "frontier_high_water": m.frontier_high_water,
        "nodes_created": m.nodes_created,
        "root_state_key": m.root_state_key,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "tie_break": m.tie_break,
        "total_expansions": m.total_expansions,
        "total_pushed": m.total_pushed,
        "total_skipped_closed": m.total_skipped_closed,
        "total_skipped_not_better": m.total_skipped_not_better,
        "total_stale_pops": m.total_stale_pops,
        "total_successors_generated": m.total_successors_generated,
    })
}

fn termination_reason_to_json(r: &TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id, cost } => {
            serde_json::json!({"cost": cost, "node_id": node_id, "type": "goal_reached"})
        }
        TerminationReasonV1::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}
