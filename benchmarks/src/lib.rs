//! Shared problem regimes for waypoint benchmark suites.

use waypoint_harness::worlds::blocks_world::BlocksWorld;
use waypoint_harness::worlds::sliding_puzzle::SlidingPuzzle;
use waypoint_kernel::carrier::atom::{Atom, TABLE};
use waypoint_kernel::carrier::atom_state::{AtomGoal, AtomState};
use waypoint_kernel::carrier::grid::GridState;
use waypoint_kernel::operators::relocate::Relocate;
use waypoint_kernel::operators::slide::Slide;
use waypoint_search::{search, SearchPolicyV1, SearchResult};

/// A named sliding-puzzle problem.
pub struct PuzzleRegime {
    pub name: &'static str,
    pub initial: GridState,
    pub goal: GridState,
}

/// A named blocks-world problem.
pub struct BlocksRegime {
    pub name: &'static str,
    pub world: BlocksWorld,
    pub initial: AtomState,
    pub goal: AtomGoal,
}

fn grid(rows: &[&[u32]]) -> GridState {
    GridState::new(rows.iter().map(|r| r.to_vec()).collect()).expect("valid benchmark grid")
}

fn on(block: &str, support: &str) -> Atom {
    Atom::on(block, support).expect("valid benchmark atom")
}

fn clear(block: &str) -> Atom {
    Atom::clear(block).expect("valid benchmark atom")
}

/// Eight-puzzle problems of increasing depth, plus a small fifteen-puzzle.
///
/// # Panics
///
/// Panics if a hard-coded board is invalid.
#[must_use]
pub fn puzzle_regimes() -> Vec<PuzzleRegime> {
    let solved3 = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
    vec![
        PuzzleRegime {
            name: "eight_depth_2",
            initial: grid(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]),
            goal: solved3.clone(),
        },
        PuzzleRegime {
            name: "eight_depth_6",
            initial: grid(&[&[4, 1, 3], &[7, 2, 6], &[0, 5, 8]]),
            goal: solved3.clone(),
        },
        PuzzleRegime {
            name: "eight_scrambled",
            initial: grid(&[&[2, 3, 6], &[1, 5, 0], &[4, 7, 8]]),
            goal: solved3,
        },
        PuzzleRegime {
            name: "fifteen_depth_4",
            initial: grid(&[
                &[1, 2, 3, 4],
                &[5, 6, 7, 8],
                &[0, 10, 11, 12],
                &[9, 13, 14, 15],
            ]),
            goal: grid(&[
                &[1, 2, 3, 4],
                &[5, 6, 7, 8],
                &[9, 10, 11, 12],
                &[13, 14, 15, 0],
            ]),
        },
    ]
}

/// Tower-building problems over `n` blocks: all blocks start on the table
/// (or stacked in reverse) and must end as one tower `B1 on B2 on ... Bn`.
///
/// # Panics
///
/// Panics if a generated state is invalid.
#[must_use]
pub fn blocks_regimes() -> Vec<BlocksRegime> {
    let mut regimes = Vec::new();
    for (name, n, reversed) in [
        ("table_to_tower_3", 3usize, false),
        ("table_to_tower_5", 5, false),
        ("reverse_tower_4", 4, true),
    ] {
        let names: Vec<String> = (1..=n).map(|i| format!("B{i}")).collect();
        let world = BlocksWorld::new(names.iter().cloned()).expect("valid benchmark blocks");

        let atoms: Vec<(Atom, bool)> = if reversed {
            // B1 on the table, B2 on B1, ..., Bn on top.
            let mut atoms = vec![(on(&names[0], TABLE), true), (clear(&names[n - 1]), true)];
            atoms.extend(names.windows(2).map(|w| (on(&w[1], &w[0]), true)));
            atoms
        } else {
            names
                .iter()
                .flat_map(|b| [(on(b, TABLE), true), (clear(b), true)])
                .collect()
        };
        let initial = AtomState::new(atoms).expect("valid benchmark state");

        let goal = AtomGoal::new(names.windows(2).map(|w| (on(&w[0], &w[1]), true)))
            .expect("valid benchmark goal");

        regimes.push(BlocksRegime {
            name,
            world,
            initial,
            goal,
        });
    }
    regimes
}

/// Run one puzzle search (no replay, no digest).
///
/// # Panics
///
/// Panics if `search()` returns an error. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_puzzle(
    regime: &PuzzleRegime,
    policy: &SearchPolicyV1,
) -> SearchResult<GridState, Slide> {
    search(regime.initial.clone(), &regime.goal, &SlidingPuzzle, policy)
        .expect("puzzle search should succeed in benchmarks")
}

/// Run one blocks-world search (no replay, no digest).
///
/// # Panics
///
/// Panics if `search()` returns an error. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_blocks(
    regime: &BlocksRegime,
    policy: &SearchPolicyV1,
) -> SearchResult<AtomState, Relocate> {
    search(regime.initial.clone(), &regime.goal, &regime.world, policy)
        .expect("blocks search should succeed in benchmarks")
}
