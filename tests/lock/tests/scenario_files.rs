//! Scenario file lock tests: load from disk, solve, verify by replay.

use std::io::Write;

use lock_tests::fixtures::{PUZZLE_SCENARIO, TOWER_SCENARIO};
use waypoint_harness::runner::{solve_scenario, RunError};
use waypoint_harness::scenario::{Scenario, ScenarioError};
use waypoint_search::{SearchError, SearchPolicyV1};

fn write_scenario(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-LOAD-SOLVE
// ---------------------------------------------------------------------------

#[test]
fn puzzle_file_round_trip() {
    let file = write_scenario(PUZZLE_SCENARIO);
    let scenario = Scenario::load(file.path()).unwrap();
    assert_eq!(scenario, Scenario::parse(PUZZLE_SCENARIO).unwrap());

    let report = solve_scenario(&scenario, &SearchPolicyV1::default()).unwrap();
    assert_eq!(report.domain_id, "sliding_puzzle");
    assert_eq!(report.total_cost, 2);
    assert_eq!(report.plan.len(), 2);
    assert!(report.graph_digest.as_str().starts_with("sha256:"));
}

#[test]
fn tower_file_round_trip() {
    let file = write_scenario(TOWER_SCENARIO);
    let scenario = Scenario::load(file.path()).unwrap();
    let report = solve_scenario(&scenario, &SearchPolicyV1::default()).unwrap();
    assert_eq!(report.plan, ["Move(B, mesa, C)", "Move(A, mesa, B)"]);
    assert!(report.final_state().contains("Tower C -> B -> A"));
    assert!(report.final_state().ends_with("Clear: A\n"));
}

#[test]
fn report_bytes_are_stable_across_loads() {
    let file = write_scenario(TOWER_SCENARIO);
    let first = solve_scenario(&Scenario::load(file.path()).unwrap(), &SearchPolicyV1::default())
        .unwrap()
        .to_canonical_json_bytes()
        .unwrap();
    let second = solve_scenario(&Scenario::load(file.path()).unwrap(), &SearchPolicyV1::default())
        .unwrap()
        .to_canonical_json_bytes()
        .unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-FAILURES
// ---------------------------------------------------------------------------

#[test]
fn unsolvable_file_reports_no_solution() {
    let text = TOWER_SCENARIO.replace("on(B, C)=true", "on(B, B)=true");
    let file = write_scenario(&text);
    let scenario = Scenario::load(file.path()).unwrap();
    let err = solve_scenario(&scenario, &SearchPolicyV1::default()).unwrap_err();
    assert!(matches!(err, RunError::Search(SearchError::NoSolution { .. })));
}

#[test]
fn mismatched_puzzle_file_is_invalid_problem() {
    let text = "[Initial]\n1 2\n3 0\n[Goal]\n1 2 3\n4 5 6\n7 8 0\n";
    let file = write_scenario(text);
    let scenario = Scenario::load(file.path()).unwrap();
    let err = solve_scenario(&scenario, &SearchPolicyV1::default()).unwrap_err();
    assert!(matches!(err, RunError::Search(SearchError::InvalidProblem(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Scenario::load(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ScenarioError::Io { .. }));
}
