//! Determinism and audit-graph lock tests for both bundled domains.

use std::collections::BTreeSet;

use lock_tests::fixtures::{all_on_table, blocks, puzzle_goal, puzzle_scrambled, tower_goal};
use waypoint_harness::worlds::sliding_puzzle::SlidingPuzzle;
use waypoint_kernel::proof::hash::canonical_hash;
use waypoint_search::graph::DOMAIN_SEARCH_GRAPH;
use waypoint_search::{search, SearchGraphV1, SearchPolicyV1, TerminationReasonV1};

fn puzzle_graph(policy: &SearchPolicyV1) -> SearchGraphV1 {
    search(puzzle_scrambled(), &puzzle_goal(), &SlidingPuzzle, policy)
        .unwrap()
        .graph
}

fn assert_unique_expansions(graph: &SearchGraphV1) {
    let mut seen = BTreeSet::new();
    for event in &graph.expansions {
        assert!(
            seen.insert(event.state_key.as_str()),
            "key {} expanded twice",
            event.state_key
        );
    }
    assert_eq!(
        u64::try_from(seen.len()).unwrap(),
        graph.metadata.total_expansions
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SEARCH-DETERMINISM-INPROC
// ---------------------------------------------------------------------------

#[test]
fn puzzle_search_determinism_inproc_n10() {
    let policy = SearchPolicyV1::default();
    let first = puzzle_graph(&policy);
    let first_bytes = first.to_canonical_json_bytes().unwrap();
    let first_digest = first.digest().unwrap();

    for i in 1..10 {
        let graph = puzzle_graph(&policy);
        assert_eq!(
            graph.to_canonical_json_bytes().unwrap(),
            first_bytes,
            "run {i} produced different graph bytes"
        );
        assert_eq!(graph.digest().unwrap(), first_digest);
    }
}

#[test]
fn blocks_search_determinism_inproc_n10() {
    let world = blocks(&["A", "B", "C"]);
    let run = || {
        search(
            all_on_table(&["A", "B", "C"]),
            &tower_goal(),
            &world,
            &SearchPolicyV1::default(),
        )
        .unwrap()
    };
    let first = run();
    for _ in 1..10 {
        let again = run();
        assert_eq!(again.plan, first.plan);
        assert_eq!(again.graph, first.graph);
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SEARCH-CLOSED-SET-MONOTONIC
// ---------------------------------------------------------------------------

#[test]
fn no_key_is_expanded_twice() {
    assert_unique_expansions(&puzzle_graph(&SearchPolicyV1::default()));

    let world = blocks(&["A", "B", "C", "D"]);
    let goal = waypoint_kernel::carrier::atom_state::AtomGoal::new([(
        lock_tests::fixtures::on("A", "A"),
        true,
    )])
    .unwrap();
    let result = search(
        all_on_table(&["A", "B", "C", "D"]),
        &goal,
        &world,
        &SearchPolicyV1::default(),
    )
    .unwrap();
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReasonV1::FrontierExhausted
    );
    // 73 tower layouts of four labelled blocks, each reached with
    // clear(mesa) recorded, plus the initial state without it.
    assert_eq!(result.graph.metadata.total_expansions, 74);
    assert_unique_expansions(&result.graph);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SEARCH-GRAPH-COUNTERS
// ---------------------------------------------------------------------------

#[test]
fn graph_counters_are_consistent() {
    let graph = puzzle_graph(&SearchPolicyV1::default());
    let m = &graph.metadata;
    let pushed: u64 = graph.expansions.iter().map(|e| e.pushed).sum();
    let generated: u64 = graph.expansions.iter().map(|e| e.successors_generated).sum();
    assert_eq!(m.total_pushed, pushed);
    assert_eq!(m.total_successors_generated, generated);
    assert_eq!(
        m.total_successors_generated,
        m.total_pushed + m.total_skipped_closed + m.total_skipped_not_better
    );
    // Root plus one node per push.
    assert_eq!(m.nodes_created, m.total_pushed + 1);
    assert!(matches!(
        m.termination_reason,
        TerminationReasonV1::GoalReached { cost: 6, .. }
    ));
    for (i, event) in graph.expansions.iter().enumerate() {
        assert_eq!(event.expansion_order, u64::try_from(i).unwrap());
    }
}

#[test]
fn recording_policy_changes_digest_not_counters() {
    let full = puzzle_graph(&SearchPolicyV1::default());
    let quiet = puzzle_graph(&SearchPolicyV1 {
        record_expansions: false,
        ..SearchPolicyV1::default()
    });
    assert!(quiet.expansions.is_empty());
    assert_eq!(full.metadata, quiet.metadata);
    assert_ne!(full.digest().unwrap(), quiet.digest().unwrap());
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SEARCH-GRAPH-DOMAIN-SEPARATION
// ---------------------------------------------------------------------------

#[test]
fn graph_digest_uses_its_own_domain_prefix() {
    assert_eq!(DOMAIN_SEARCH_GRAPH, b"WAYPOINT::SEARCH_GRAPH::V1\0");
    let graph = puzzle_graph(&SearchPolicyV1::default());
    let bytes = graph.to_canonical_json_bytes().unwrap();
    assert_eq!(
        graph.digest().unwrap(),
        canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes)
    );
    assert_ne!(
        graph.digest().unwrap(),
        canonical_hash(b"WAYPOINT::OTHER::V1\0", &bytes)
    );
}
