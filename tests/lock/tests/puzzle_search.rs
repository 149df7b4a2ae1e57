//! Sliding-puzzle lock tests: plan validity, cost accounting, and the
//! failure modes of the puzzle domain.

use lock_tests::fixtures::{grid, puzzle_goal, puzzle_initial, puzzle_scrambled};
use waypoint_harness::worlds::sliding_puzzle::SlidingPuzzle;
use waypoint_kernel::operators::slide::Direction;
use waypoint_kernel::KernelError;
use waypoint_search::plan::{reaches_goal, replay, replay_states};
use waypoint_search::{find_solution, search, SearchError, SearchPolicyV1};

// ---------------------------------------------------------------------------
// ACCEPTANCE: PUZZLE-PLAN-REACHES-GOAL
// ---------------------------------------------------------------------------

#[test]
fn two_move_puzzle_is_solved_by_replay() {
    let plan = find_solution(puzzle_initial(), &puzzle_goal(), &SlidingPuzzle).unwrap();
    assert!(!plan.is_empty());
    assert!(reaches_goal(&SlidingPuzzle, &puzzle_initial(), &puzzle_goal(), &plan).unwrap());
    let dirs: Vec<Direction> = plan.iter().map(|a| a.direction).collect();
    assert_eq!(dirs, [Direction::Down, Direction::Right]);
}

#[test]
fn scrambled_puzzle_plan_is_optimal_under_misplaced_tiles() {
    let plan = find_solution(puzzle_scrambled(), &puzzle_goal(), &SlidingPuzzle).unwrap();
    assert_eq!(plan.total_cost(), 6);
    let last = replay(&SlidingPuzzle, &puzzle_scrambled(), &plan).unwrap();
    assert_eq!(last, puzzle_goal());
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: PUZZLE-COST-ADDITIVITY
// ---------------------------------------------------------------------------

#[test]
fn cost_equals_plan_length_equals_goal_g() {
    let result = search(
        puzzle_scrambled(),
        &puzzle_goal(),
        &SlidingPuzzle,
        &SearchPolicyV1::default(),
    )
    .unwrap();
    let goal_g = result.goal_node().unwrap().g_cost;
    let plan = result.plan.unwrap();
    assert_eq!(plan.total_cost(), i64::try_from(plan.len()).unwrap());
    assert_eq!(plan.total_cost(), goal_g);
}

#[test]
fn replay_never_mutates_visited_states() {
    let initial = puzzle_scrambled();
    let snapshot = initial.clone();
    let plan = find_solution(initial.clone(), &puzzle_goal(), &SlidingPuzzle).unwrap();
    let states = replay_states(&SlidingPuzzle, &initial, &plan).unwrap();
    assert_eq!(initial, snapshot);
    assert_eq!(states.first(), Some(&snapshot));
    for pair in states.windows(2) {
        assert_ne!(pair[0], pair[1], "every step must move the blank");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: PUZZLE-EDGE-CASES
// ---------------------------------------------------------------------------

#[test]
fn already_solved_returns_empty_plan() {
    let plan = find_solution(puzzle_goal(), &puzzle_goal(), &SlidingPuzzle).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.total_cost(), 0);
}

#[test]
fn wrong_parity_is_no_solution() {
    // Swapping two tiles of a 2x2 board flips parity: unreachable.
    let initial = grid(&[&[2, 1], &[3, 0]]);
    let goal = grid(&[&[1, 2], &[3, 0]]);
    let err = find_solution(initial, &goal, &SlidingPuzzle).unwrap_err();
    // 4!/2 = 12 reachable arrangements, each expanded once.
    assert_eq!(err, SearchError::NoSolution { expansions: 12 });
}

#[test]
fn mismatched_dimensions_are_invalid_problem() {
    let initial = grid(&[&[1, 0]]);
    let err = find_solution(initial, &puzzle_goal(), &SlidingPuzzle).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidProblem(KernelError::InvalidArgument { .. })
    ));
}

#[test]
fn replay_from_wrong_start_fails_closed() {
    let plan = find_solution(puzzle_initial(), &puzzle_goal(), &SlidingPuzzle).unwrap();
    // Blank in the bottom-right corner cannot move down.
    let err = replay(&SlidingPuzzle, &puzzle_goal(), &plan).unwrap_err();
    assert!(matches!(err, KernelError::IllegalMove { .. }));
}
