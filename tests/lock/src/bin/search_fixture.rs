//! Binary that solves the canonical puzzle and tower scenarios and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `key=value` lines, one block per scenario.

use lock_tests::fixtures::{PUZZLE_SCENARIO, TOWER_SCENARIO};
use waypoint_harness::runner::solve_scenario;
use waypoint_harness::scenario::Scenario;
use waypoint_kernel::proof::hash::canonical_hash;
use waypoint_search::SearchPolicyV1;

/// Domain prefix for hashing the fixture's run report bytes.
const DOMAIN_FIXTURE_REPORT: &[u8] = b"WAYPOINT::FIXTURE_REPORT::V1\0";

fn main() {
    let policy = SearchPolicyV1::default();
    for (name, text) in [("puzzle", PUZZLE_SCENARIO), ("tower", TOWER_SCENARIO)] {
        let scenario = Scenario::parse(text).expect("fixture scenario parses");
        let report = solve_scenario(&scenario, &policy).expect("fixture scenario solves");
        let bytes = report
            .to_canonical_json_bytes()
            .expect("report serializes");

        println!("{name}.domain_id={}", report.domain_id);
        println!("{name}.plan={}", report.plan.join(" | "));
        println!("{name}.total_cost={}", report.total_cost);
        println!("{name}.expansions={}", report.expansions);
        println!("{name}.graph_digest={}", report.graph_digest.as_str());
        println!(
            "{name}.report_digest={}",
            canonical_hash(DOMAIN_FIXTURE_REPORT, &bytes).as_str()
        );
    }
}
