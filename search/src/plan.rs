//! Plans and plan replay.
//!
//! A [`Plan`] is the engine's only answer: the ordered actions from the
//! initial state to a goal state, plus the accumulated step cost. Replay
//! goes through [`PlanningDomain::apply`], which is contract-checked, so a
//! plan that is replayed against the wrong start state fails loudly instead
//! of producing a nonsense state.

use waypoint_kernel::KernelError;

use crate::contract::PlanningDomain;

/// An ordered action sequence and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    actions: Vec<A>,
    total_cost: i64,
}

impl<A> Plan<A> {
    #[must_use]
    pub fn new(actions: Vec<A>, total_cost: i64) -> Self {
        Self {
            actions,
            total_cost,
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Sum of step costs along the plan (the goal node's g-cost).
    #[must_use]
    pub const fn total_cost(&self) -> i64 {
        self.total_cost
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.actions.iter()
    }

    #[must_use]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

impl<A: std::fmt::Display> Plan<A> {
    /// Display rendering of each action, in order.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.actions.iter().map(ToString::to_string).collect()
    }
}

impl<'a, A> IntoIterator for &'a Plan<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Replay `plan` from `initial`, returning every visited state.
///
/// The result starts with a clone of `initial` and has `plan.len() + 1`
/// entries.
///
/// # Errors
///
/// Returns the first [`KernelError`] raised by [`PlanningDomain::apply`].
pub fn replay_states<D: PlanningDomain>(
    domain: &D,
    initial: &D::State,
    plan: &Plan<D::Action>,
) -> Result<Vec<D::State>, KernelError> {
    let mut states = Vec::with_capacity(plan.len() + 1);
    states.push(initial.clone());
    let mut current = initial.clone();
    for action in plan {
        current = domain.apply(&current, action)?;
        states.push(current.clone());
    }
    Ok(states)
}

/// Replay `plan` from `initial` and return the final state.
///
/// # Errors
///
/// Returns the first [`KernelError`] raised by [`PlanningDomain::apply`].
pub fn replay<D: PlanningDomain>(
    domain: &D,
    initial: &D::State,
    plan: &Plan<D::Action>,
) -> Result<D::State, KernelError> {
    let mut current = initial.clone();
    for action in plan {
        current = domain.apply(&current, action)?;
    }
    Ok(current)
}

/// Whether replaying `plan` from `initial` ends in a state satisfying `goal`.
///
/// # Errors
///
/// Returns a [`KernelError`] if an action is inapplicable or the final state
/// cannot be compared to `goal`.
pub fn reaches_goal<D: PlanningDomain>(
    domain: &D,
    initial: &D::State,
    goal: &D::Goal,
    plan: &Plan<D::Action>,
) -> Result<bool, KernelError> {
    let last = replay(domain, initial, plan)?;
    domain.is_goal(&last, goal)
}
