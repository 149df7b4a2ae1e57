//! Search entry point and expansion loop.
//!
//! A* over a [`PlanningDomain`]: frontier ordered by `f = g + h`, closed-set
//! pruning by canonical key, best-g tracking per key. Duplicates are pushed
//! rather than re-keyed; outdated entries are skipped when popped.
//!
//! Loop, per pop:
//!
//! 1. Pop the best entry. If its key is already closed, count a stale pop
//!    and continue.
//! 2. Goal test. On success, reconstruct the path and return.
//! 3. Close the key, then for each successor: skip if its key is closed;
//!    skip unless its g-cost improves on the best recorded for that key;
//!    otherwise create a node and push it.
//!
//! The goal test happens on pop, not on generation, so the returned plan is
//! the cheapest one whenever the heuristic is admissible. Neither bundled
//! heuristic is guaranteed admissible; plans are returned as found.

use tracing::{debug, info};

use crate::contract::PlanningDomain;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::graph::{ExpandEventV1, SearchGraphMetadata, SearchGraphV1, TerminationReasonV1};
use crate::node::{FrontierKey, SearchNodeV1};
use crate::plan::Plan;
use crate::policy::SearchPolicyV1;

/// Result of a search execution.
///
/// Always carries the complete [`SearchGraphV1`] regardless of how the
/// search terminated. Use [`SearchResult::into_plan`] to turn an exhausted
/// search into [`SearchError::NoSolution`].
#[derive(Debug)]
pub struct SearchResult<S, A> {
    /// The plan to the goal (if found).
    pub plan: Option<Plan<A>>,
    /// The complete search graph audit trail.
    pub graph: SearchGraphV1,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNodeV1<S, A>>,
    goal_node_id: Option<usize>,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNodeV1<S, A>> {
        self.goal_node_id.and_then(|id| self.nodes.get(id))
    }

    /// Number of nodes expanded.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.graph.metadata.total_expansions
    }

    /// Unwrap the plan.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoSolution`] if the frontier was exhausted.
    pub fn into_plan(self) -> Result<Plan<A>, SearchError> {
        let expansions = self.expansions();
        self.plan.ok_or(SearchError::NoSolution { expansions })
    }
}

/// Find a plan from `initial` to `goal` with the default policy.
///
/// # Errors
///
/// - [`SearchError::NoSolution`] if no plan exists.
/// - [`SearchError::InvalidProblem`] if the domain rejects the problem.
pub fn find_solution<D: PlanningDomain>(
    initial: D::State,
    goal: &D::Goal,
    domain: &D,
) -> Result<Plan<D::Action>, SearchError> {
    search(initial, goal, domain, &SearchPolicyV1::default())?.into_plan()
}

/// Run A* from `initial` toward `goal`.
///
/// An exhausted frontier is a normal outcome here: the result carries no
/// plan and a [`TerminationReasonV1::FrontierExhausted`] graph.
///
/// # Errors
///
/// Returns [`SearchError::InvalidProblem`] if
/// [`PlanningDomain::validate_problem`] or [`PlanningDomain::is_goal`]
/// rejects the inputs. No graph is produced in that case.
pub fn search<D: PlanningDomain>(
    initial: D::State,
    goal: &D::Goal,
    domain: &D,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State, D::Action>, SearchError> {
    domain.validate_problem(&initial, goal)?;

    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNodeV1<D::State, D::Action>> = Vec::new();
    let mut expansions: Vec<ExpandEventV1> = Vec::new();
    let mut counters = Counters::default();

    let root_key = domain.state_key(&initial);
    let root_h = domain.heuristic(&initial, goal);
    let root = SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        state: initial,
        state_key: root_key.clone(),
        producing_action: None,
        depth: 0,
        g_cost: 0,
        h_cost: root_h,
        creation_order: 0,
    };
    frontier.offer_g(&root_key, 0);
    frontier.push(frontier_key(&root, policy), 0);
    nodes.push(root);

    debug!(
        domain = domain.domain_id(),
        root = %root_key,
        h = root_h,
        "search started"
    );

    while let Some((pop_key, node_id)) = frontier.pop() {
        let current = &nodes[node_id];
        if frontier.is_closed(&current.state_key) {
            counters.stale_pops += 1;
            continue;
        }

        if domain.is_goal(&current.state, goal)? {
            let cost = current.g_cost;
            info!(
                domain = domain.domain_id(),
                expansions = counters.expansions,
                cost,
                nodes = nodes.len(),
                "goal reached"
            );
            let actions = reconstruct_path(&nodes, node_id)
                .into_iter()
                .filter_map(|id| nodes[id].producing_action.clone())
                .collect();
            let graph = build_graph(
                expansions,
                &counters,
                TerminationReasonV1::GoalReached {
                    node_id: node_id as u64,
                    cost,
                },
                domain.domain_id(),
                root_key.as_str(),
                policy,
                nodes.len(),
                frontier.high_water(),
            );
            return Ok(SearchResult {
                plan: Some(Plan::new(actions, cost)),
                graph,
                nodes,
                goal_node_id: Some(node_id),
            });
        }

        let parent_key = current.state_key.clone();
        let parent_g = current.g_cost;
        let parent_depth = current.depth;
        debug!(
            expansion = counters.expansions,
            key = %parent_key,
            f = pop_key.f_cost,
            g = parent_g,
            "expanding"
        );
        frontier.close(parent_key.clone());

        let successors = domain.successors(&current.state);
        let mut event = ExpandEventV1 {
            expansion_order: counters.expansions,
            node_id: node_id as u64,
            state_key: parent_key.as_str().to_string(),
            f_cost: pop_key.f_cost,
            g_cost: parent_g,
            depth: parent_depth,
            successors_generated: successors.len() as u64,
            pushed: 0,
            skipped_closed: 0,
            skipped_not_better: 0,
        };

        for successor in successors {
            let key = domain.state_key(&successor.state);
            if frontier.is_closed(&key) {
                event.skipped_closed += 1;
                continue;
            }
            let g_cost = parent_g.saturating_add(successor.cost);
            if !frontier.offer_g(&key, g_cost) {
                event.skipped_not_better += 1;
                continue;
            }
            let h_cost = domain.heuristic(&successor.state, goal);
            let child_id = nodes.len();
            let child = SearchNodeV1 {
                node_id: child_id,
                parent_id: Some(node_id),
                state: successor.state,
                state_key: key,
                producing_action: Some(successor.action),
                depth: parent_depth + 1,
                g_cost,
                h_cost,
                creation_order: child_id as u64,
            };
            frontier.push(frontier_key(&child, policy), child_id);
            nodes.push(child);
            event.pushed += 1;
        }

        counters.record(&event);
        if policy.record_expansions {
            expansions.push(event);
        }
    }

    info!(
        domain = domain.domain_id(),
        expansions = counters.expansions,
        nodes = nodes.len(),
        "frontier exhausted without reaching the goal"
    );
    let graph = build_graph(
        expansions,
        &counters,
        TerminationReasonV1::FrontierExhausted,
        domain.domain_id(),
        root_key.as_str(),
        policy,
        nodes.len(),
        frontier.high_water(),
    );
    Ok(SearchResult {
        plan: None,
        graph,
        nodes,
        goal_node_id: None,
    })
}

/// Reconstruct the path from root to `goal_node_id` by following parent
/// links. Returns node ids from root to goal.
#[must_use]
pub fn reconstruct_path<S, A>(nodes: &[SearchNodeV1<S, A>], goal_node_id: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(goal_node_id);
    while let Some(id) = current {
        path.push(id);
        current = nodes.get(id).and_then(|n| n.parent_id);
    }
    path.reverse();
    path
}

fn frontier_key<S, A>(node: &SearchNodeV1<S, A>, policy: &SearchPolicyV1) -> FrontierKey {
    FrontierKey {
        f_cost: node.f_cost(),
        tie_rank: policy.tie_break.rank(node.depth),
        creation_order: node.creation_order,
    }
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    successors_generated: u64,
    pushed: u64,
    skipped_closed: u64,
    skipped_not_better: u64,
    stale_pops: u64,
}

impl Counters {
    fn record(&mut self, event: &ExpandEventV1) {
        self.expansions += 1;
        self.successors_generated += event.successors_generated;
        self.pushed += event.pushed;
        self.skipped_closed += event.skipped_closed;
        self.skipped_not_better += event.skipped_not_better;
    }
}

#[allow(clippy::too_many_arguments)]
fn build_graph(
    expansions: Vec<ExpandEventV1>,
    counters: &Counters,
    termination_reason: TerminationReasonV1,
    domain_id: &str,
    root_state_key: &str,
    policy: &SearchPolicyV1,
    nodes_created: usize,
    frontier_high_water: u64,
) -> SearchGraphV1 {
    SearchGraphV1 {
        expansions,
        metadata: SearchGraphMetadata {
            domain_id: domain_id.to_string(),
            root_state_key: root_state_key.to_string(),
            tie_break: policy.tie_break_id().to_string(),
            total_expansions: counters.expansions,
            total_successors_generated: counters.successors_generated,
            total_pushed: counters.pushed,
            total_skipped_closed: counters.skipped_closed,
            total_skipped_not_better: counters.skipped_not_better,
            total_stale_pops: counters.stale_pops,
            nodes_created: nodes_created as u64,
            frontier_high_water,
            termination_reason,
        },
    }
}
