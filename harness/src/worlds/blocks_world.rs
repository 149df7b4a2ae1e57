//! `BlocksWorld`: predicate-based STRIPS blocks world as a planning domain.
//!
//! Positions are the declared blocks (in declaration order) followed by the
//! table. For each clear block with a known support, every other position is
//! tried as a destination; the move is emitted when its preconditions hold.
//! Emission order is block-major, destination-minor, so the search is fully
//! determined by the declared block order.
//!
//! The heuristic counts required goal atoms that do not hold yet.

use waypoint_kernel::carrier::atom::{validate_object_name, Atom, TABLE};
use waypoint_kernel::carrier::atom_state::{AtomGoal, AtomState};
use waypoint_kernel::carrier::key::StateKey;
use waypoint_kernel::operators::relocate::{self, Relocate};
use waypoint_kernel::KernelError;
use waypoint_search::contract::{PlanningDomain, Successor};

/// Stable domain identifier.
pub const DOMAIN_ID: &str = "blocks_world";

/// Blocks world over a fixed, ordered set of block names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocksWorld {
    blocks: Vec<String>,
    /// `blocks` followed by [`TABLE`].
    positions: Vec<String>,
}

impl BlocksWorld {
    /// Declare the blocks, in the order successors are generated.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] for an empty list, an invalid
    /// or duplicate name, or a block named after the table.
    pub fn new<I, S>(blocks: I) -> Result<Self, KernelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let blocks: Vec<String> = blocks.into_iter().map(Into::into).collect();
        if blocks.is_empty() {
            return Err(invalid("at least one block is required"));
        }
        for (i, block) in blocks.iter().enumerate() {
            validate_object_name(block)?;
            if block == TABLE {
                return Err(invalid(format!("'{TABLE}' is reserved for the table")));
            }
            if blocks[..i].contains(block) {
                return Err(invalid(format!("block '{block}' is declared twice")));
            }
        }
        let mut positions = blocks.clone();
        positions.push(TABLE.to_string());
        Ok(Self { blocks, positions })
    }

    /// Declared blocks in generation order.
    #[must_use]
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Reject atoms that name an object outside this world.
    ///
    /// `on(b, s)` needs `b` to be a declared block and `s` a position;
    /// `clear(x)` needs `x` to be a position.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] naming the first offending
    /// atom.
    pub fn check_atoms<'a>(
        &self,
        atoms: impl IntoIterator<Item = &'a Atom>,
    ) -> Result<(), KernelError> {
        let is_block = |name: &str| self.blocks.iter().any(|b| b == name);
        let is_position = |name: &str| name == TABLE || is_block(name);
        for atom in atoms {
            let known = match atom {
                Atom::On { block, support } => is_block(block) && is_position(support),
                Atom::Clear { block } => is_position(block),
            };
            if !known {
                return Err(invalid(format!("{atom} names an undeclared block")));
            }
        }
        Ok(())
    }

    /// First position `block` rests on, scanning blocks then the table.
    fn support_of<'a>(&'a self, state: &AtomState, block: &str) -> Option<&'a str> {
        self.positions
            .iter()
            .map(String::as_str)
            .find(|position| state.is_on(block, position))
    }
}

fn invalid(detail: impl Into<String>) -> KernelError {
    KernelError::InvalidArgument {
        detail: detail.into(),
    }
}

impl PlanningDomain for BlocksWorld {
    type State = AtomState;
    type Action = Relocate;
    type Goal = AtomGoal;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        DOMAIN_ID
    }

    fn state_key(&self, state: &AtomState) -> StateKey {
        state.canonical_key()
    }

    fn successors(&self, state: &AtomState) -> Vec<Successor<AtomState, Relocate>> {
        let mut out = Vec::new();
        for block in &self.blocks {
            if !state.is_clear(block) {
                continue;
            }
            let Some(support) = self.support_of(state, block) else {
                continue;
            };
            for destination in &self.positions {
                if destination == support || destination == block {
                    continue;
                }
                let action = Relocate {
                    block: block.clone(),
                    from: support.to_string(),
                    to: destination.clone(),
                };
                if relocate::preconditions_hold(state, &action) {
                    let next = relocate::apply(state, &action);
                    out.push(Successor {
                        action,
                        state: next,
                        cost: 1,
                    });
                }
            }
        }
        out
    }

    fn heuristic(&self, state: &AtomState, goal: &AtomGoal) -> i64 {
        i64::try_from(goal.unsatisfied_count(state)).unwrap_or(i64::MAX)
    }

    fn is_goal(&self, state: &AtomState, goal: &AtomGoal) -> Result<bool, KernelError> {
        Ok(goal.is_satisfied_by(state))
    }

    fn apply(&self, state: &AtomState, action: &Relocate) -> Result<AtomState, KernelError> {
        relocate::apply_checked(state, action)
    }

    fn validate_problem(&self, initial: &AtomState, goal: &AtomGoal) -> Result<(), KernelError> {
        self.check_atoms(initial.iter().map(|(atom, _)| atom))?;
        self.check_atoms(goal.iter().map(|(atom, _)| atom))
    }
}
