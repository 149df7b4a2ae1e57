//! Harness runner: solve a scenario and verify the plan by replay.
//!
//! # Pipeline
//!
//! ```text
//! Scenario → search() → into_plan()
//!   → replay_states() with checked apply → is_goal(final)
//!   → graph digest → RunReport
//! ```
//!
//! The runner never trusts the search result on its own: the plan is
//! replayed through the domain's contract-checked `apply`, and the final
//! state must both satisfy the goal and carry the goal node's key.

use tracing::{debug, info};

use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::ContentHash;
use waypoint_kernel::KernelError;
use waypoint_search::contract::PlanningDomain;
use waypoint_search::error::SearchError;
use waypoint_search::plan::replay_states;
use waypoint_search::policy::SearchPolicyV1;
use waypoint_search::search::search;

use crate::render::{render_blocks, render_grid};
use crate::scenario::Scenario;
use crate::worlds::sliding_puzzle::SlidingPuzzle;

/// Error during a scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Search failed (no solution or invalid problem).
    Search(SearchError),
    /// A plan step was rejected by the checked `apply`.
    ReplayFailed(KernelError),
    /// The replayed plan does not end in the state the search reported.
    ReplayDivergence { detail: String },
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::ReplayFailed(e) => write!(f, "plan replay failed: {e}"),
            Self::ReplayDivergence { detail } => write!(f, "plan replay diverged: {detail}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::ReplayFailed(e) => Some(e),
            Self::ReplayDivergence { .. } | Self::CanonFailed { .. } => None,
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Outcome of a verified scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub domain_id: String,
    /// Rendered actions, in order.
    pub plan: Vec<String>,
    pub total_cost: i64,
    pub expansions: u64,
    /// Digest of the search graph's canonical JSON.
    pub graph_digest: ContentHash,
    /// Rendering of every state along the plan, initial state first.
    pub states: Vec<String>,
}

impl RunReport {
    /// Rendering of the final (goal) state.
    #[must_use]
    pub fn final_state(&self) -> &str {
        self.states.last().map_or("", String::as_str)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "domain_id": self.domain_id,
            "expansions": self.expansions,
            "graph_digest": self.graph_digest.as_str(),
            "plan": self.plan,
            "states": self.states,
            "total_cost": self.total_cost,
        })
    }

    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::CanonFailed`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, RunError> {
        canonical_json_bytes(&self.to_json_value()).map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })
    }
}

/// Solve `scenario` under `policy` and verify the plan by replay.
///
/// # Errors
///
/// - [`RunError::Search`] if there is no plan or the problem is invalid.
/// - [`RunError::ReplayFailed`] / [`RunError::ReplayDivergence`] if the plan
///   does not replay to a goal state.
/// - [`RunError::CanonFailed`] if the search graph cannot be digested.
pub fn solve_scenario(scenario: &Scenario, policy: &SearchPolicyV1) -> Result<RunReport, RunError> {
    info!(domain = scenario.domain_id(), tie_break = policy.tie_break_id(), "solving scenario");
    match scenario {
        Scenario::Puzzle { initial, goal } => {
            solve(&SlidingPuzzle, initial, goal, policy, render_grid)
        }
        Scenario::Blocks {
            world,
            initial,
            goal,
        } => solve(world, initial, goal, policy, render_blocks),
    }
}

/// Domain-generic solve + replay verification.
///
/// # Errors
///
/// See [`solve_scenario`].
pub fn solve<D: PlanningDomain>(
    domain: &D,
    initial: &D::State,
    goal: &D::Goal,
    policy: &SearchPolicyV1,
    render: fn(&D::State) -> String,
) -> Result<RunReport, RunError> {
    let result = search(initial.clone(), goal, domain, policy)?;
    let graph_digest = result.graph.digest().map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })?;
    let expansions = result.expansions();
    let goal_key = result.goal_node().map(|n| n.state_key.clone());
    let plan = result.into_plan()?;

    let states = replay_states(domain, initial, &plan).map_err(RunError::ReplayFailed)?;
    let last = states.last().unwrap_or(initial);
    if !domain.is_goal(last, goal).map_err(RunError::ReplayFailed)? {
        return Err(RunError::ReplayDivergence {
            detail: "final state does not satisfy the goal".into(),
        });
    }
    let last_key = domain.state_key(last);
    if goal_key.as_ref() != Some(&last_key) {
        return Err(RunError::ReplayDivergence {
            detail: format!("replay ended at {last_key}, search reported {goal_key:?}"),
        });
    }
    debug!(steps = plan.len(), "plan replay verified");

    Ok(RunReport {
        domain_id: domain.domain_id().to_string(),
        plan: plan.rendered(),
        total_cost: plan.total_cost(),
        expansions,
        graph_digest,
        states: states.iter().map(render).collect(),
    })
}
