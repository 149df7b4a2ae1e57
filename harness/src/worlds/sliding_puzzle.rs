//! `SlidingPuzzle`: the sliding-tile puzzle as a planning domain.
//!
//! Successors move the blank up, down, left, right (in that order), keeping
//! only moves that stay on the board. Every move costs 1. The heuristic
//! counts non-blank tiles out of place.

use waypoint_kernel::carrier::grid::{GridState, BLANK};
use waypoint_kernel::carrier::key::StateKey;
use waypoint_kernel::operators::slide::{self, Direction, Slide};
use waypoint_kernel::KernelError;
use waypoint_search::contract::{PlanningDomain, Successor};

/// Stable domain identifier.
pub const DOMAIN_ID: &str = "sliding_puzzle";

/// The sliding-tile puzzle domain. Stateless; the board shape comes from the
/// states themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingPuzzle;

/// Number of non-blank cells whose value differs from `goal`.
///
/// Boards of different shapes are compared over the cells they share by
/// row-major index; [`SlidingPuzzle::validate_problem`] rules that case out
/// before search.
#[must_use]
pub fn misplaced_tiles(state: &GridState, goal: &GridState) -> i64 {
    let count = state
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|(&have, &want)| have != BLANK && have != want)
        .count();
    i64::try_from(count).unwrap_or(i64::MAX)
}

impl PlanningDomain for SlidingPuzzle {
    type State = GridState;
    type Action = Slide;
    type Goal = GridState;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        DOMAIN_ID
    }

    fn state_key(&self, state: &GridState) -> StateKey {
        state.canonical_key()
    }

    fn successors(&self, state: &GridState) -> Vec<Successor<GridState, Slide>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let action = Slide::new(direction);
                slide::apply(state, action).ok().map(|next| Successor {
                    action,
                    state: next,
                    cost: 1,
                })
            })
            .collect()
    }

    fn heuristic(&self, state: &GridState, goal: &GridState) -> i64 {
        misplaced_tiles(state, goal)
    }

    fn is_goal(&self, state: &GridState, goal: &GridState) -> Result<bool, KernelError> {
        state.matches(goal)
    }

    fn apply(&self, state: &GridState, action: &Slide) -> Result<GridState, KernelError> {
        slide::apply(state, *action)
    }

    fn validate_problem(&self, initial: &GridState, goal: &GridState) -> Result<(), KernelError> {
        initial.ensure_same_shape(goal)
    }
}
