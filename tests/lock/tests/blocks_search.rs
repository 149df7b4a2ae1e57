//! Blocks-world lock tests: the tower plan, goal semantics, and
//! construction validation.

use lock_tests::fixtures::{all_on_table, blocks, clear, on, tower_goal};
use waypoint_kernel::carrier::atom::{Atom, TABLE};
use waypoint_kernel::carrier::atom_state::{AtomGoal, AtomState};
use waypoint_kernel::operators::relocate::{self, Relocate};
use waypoint_kernel::KernelError;
use waypoint_search::plan::{reaches_goal, replay};
use waypoint_search::{find_solution, search, SearchError, SearchPolicyV1, TieBreakV1};

// ---------------------------------------------------------------------------
// ACCEPTANCE: BLOCKS-TOWER-PLAN
// ---------------------------------------------------------------------------

#[test]
fn tower_plan_is_two_moves_bottom_up() {
    let world = blocks(&["A", "B", "C"]);
    let initial = all_on_table(&["A", "B", "C"]);
    let plan = find_solution(initial.clone(), &tower_goal(), &world).unwrap();
    assert_eq!(plan.rendered(), ["Move(B, mesa, C)", "Move(A, mesa, B)"]);
    assert_eq!(plan.total_cost(), 2);
    assert!(reaches_goal(&world, &initial, &tower_goal(), &plan).unwrap());
}

#[test]
fn moving_off_the_table_records_table_clear() {
    let world = blocks(&["A", "B", "C"]);
    let initial = all_on_table(&["A", "B", "C"]);
    assert_eq!(initial.get(&clear(TABLE)), None);
    let plan = find_solution(initial.clone(), &tower_goal(), &world).unwrap();
    let last = replay(&world, &initial, &plan).unwrap();
    assert_eq!(last.get(&clear(TABLE)), Some(true));
    assert_eq!(
        last.canonical_key().as_str(),
        "clear(A);clear(mesa);on(A, B);on(B, C);on(C, mesa)"
    );
}

#[test]
fn tower_plan_is_stable_across_tie_break_policies() {
    let world = blocks(&["A", "B", "C"]);
    let policy = SearchPolicyV1 {
        tie_break: TieBreakV1::ShallowerFirst,
        ..SearchPolicyV1::default()
    };
    let result = search(all_on_table(&["A", "B", "C"]), &tower_goal(), &world, &policy).unwrap();
    assert_eq!(result.plan.unwrap().total_cost(), 2);
}

#[test]
fn unstacking_requires_clearing_first() {
    // C on B on A; goal: A on B on C.
    let world = blocks(&["A", "B", "C"]);
    let initial = AtomState::new([
        (on("A", TABLE), true),
        (on("B", "A"), true),
        (on("C", "B"), true),
        (clear("C"), true),
    ])
    .unwrap();
    let goal = AtomGoal::new([(on("A", "B"), true), (on("B", "C"), true)]).unwrap();
    let plan = find_solution(initial.clone(), &goal, &world).unwrap();
    let last = replay(&world, &initial, &plan).unwrap();
    assert!(goal.is_satisfied_by(&last));
    assert!(last.is_on("C", TABLE));
    assert_eq!(plan.total_cost(), i64::try_from(plan.len()).unwrap());
    assert_eq!(plan.rendered().first().map(String::as_str), Some("Move(C, B, mesa)"));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: BLOCKS-GOAL-SEMANTICS
// ---------------------------------------------------------------------------

#[test]
fn self_support_goal_has_no_solution() {
    let world = blocks(&["A", "B", "C"]);
    let goal = AtomGoal::new([(on("A", "A"), true)]).unwrap();
    let err = find_solution(all_on_table(&["A", "B", "C"]), &goal, &world).unwrap_err();
    assert!(matches!(err, SearchError::NoSolution { .. }), "{err}");
}

#[test]
fn false_goal_atoms_impose_nothing() {
    let world = blocks(&["A", "B"]);
    let goal = AtomGoal::new([(on("A", TABLE), false), (clear("B"), false)]).unwrap();
    let plan = find_solution(all_on_table(&["A", "B"]), &goal, &world).unwrap();
    assert!(plan.is_empty(), "only true atoms are enforced");
}

#[test]
fn satisfied_goal_returns_empty_plan() {
    let world = blocks(&["A", "B"]);
    let goal = AtomGoal::new([(on("A", TABLE), true)]).unwrap();
    let plan = find_solution(all_on_table(&["A", "B"]), &goal, &world).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.total_cost(), 0);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: BLOCKS-CONSTRUCTION-VALIDATION
// ---------------------------------------------------------------------------

#[test]
fn atom_arity_is_checked() {
    let err = Atom::new("on", &["A"]).unwrap_err();
    assert!(matches!(err, KernelError::InvalidArgument { .. }));
}

#[test]
fn unsupported_block_is_invalid_state() {
    let err = AtomState::new([(on("A", "B"), true)]).unwrap_err();
    assert!(matches!(err, KernelError::InvalidState { .. }));
}

#[test]
fn undeclared_goal_block_is_invalid_problem() {
    let world = blocks(&["A", "B"]);
    let goal = AtomGoal::new([(on("A", "Z"), true)]).unwrap();
    let err = find_solution(all_on_table(&["A", "B"]), &goal, &world).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidProblem(KernelError::InvalidArgument { .. })
    ));
}

#[test]
fn apply_leaves_input_untouched() {
    let state = all_on_table(&["A", "B"]);
    let before = state.clone();
    let next = relocate::apply(&state, &Relocate::new("A", TABLE, "B").unwrap());
    assert_eq!(state, before);
    assert!(next.is_on("A", "B"));
    assert!(!next.is_clear("B"));
}
