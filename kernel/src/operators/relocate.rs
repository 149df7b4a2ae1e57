//! Blocks-world moves: relocate a clear block from its support to a new one.
//!
//! STRIPS form of `Move(b, f, t)`:
//!
//! ```text
//! pre:  clear(b), on(b, f), t == mesa or clear(t), t != b, t != f
//! add:  on(b, t), clear(f)
//! del:  on(b, f), clear(t)            (clear(t) only when t is a block)
//! ```
//!
//! Moving a block off the table records `clear(mesa)`; the table is never
//! made unclear, so a destination of `mesa` needs no `clear` atom.
//!
//! [`apply`] performs the effects without checking preconditions; the
//! successor generator only calls it for moves that passed
//! [`preconditions_hold`]. [`apply_checked`] is the contract-checked entry
//! point for replaying plans from outside the generator.

use crate::carrier::atom::{validate_object_name, Atom, TABLE};
use crate::carrier::atom_state::AtomState;
use crate::error::KernelError;

/// A blocks-world action: move `block` from `from` onto `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Relocate {
    pub block: String,
    pub from: String,
    pub to: String,
}

impl Relocate {
    /// Build a relocation with validated object names.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] on an invalid object name or
    /// when `block` is the table.
    pub fn new(block: &str, from: &str, to: &str) -> Result<Self, KernelError> {
        validate_object_name(block)?;
        validate_object_name(from)?;
        validate_object_name(to)?;
        if block == TABLE {
            return Err(KernelError::invalid_argument("the table cannot be moved"));
        }
        Ok(Self {
            block: block.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

impl std::fmt::Display for Relocate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {}, {})", self.block, self.from, self.to)
    }
}

/// Whether the STRIPS preconditions of `action` hold in `state`.
#[must_use]
pub fn preconditions_hold(state: &AtomState, action: &Relocate) -> bool {
    action.to != action.block
        && action.to != action.from
        && state.is_clear(&action.block)
        && state.is_on(&action.block, &action.from)
        && (action.to == TABLE || state.is_clear(&action.to))
}

/// Apply the effects of `action` to a copy of `state`.
///
/// Preconditions are not checked: an inapplicable action yields a physically
/// inconsistent state. `state` is never mutated.
#[must_use]
pub fn apply(state: &AtomState, action: &Relocate) -> AtomState {
    let mut updates = vec![
        (Atom::on_unchecked(&action.block, &action.from), false),
        (Atom::on_unchecked(&action.block, &action.to), true),
        (Atom::clear_unchecked(&action.from), true),
    ];
    if action.to != TABLE {
        updates.push((Atom::clear_unchecked(&action.to), false));
    }
    state.with_assignments(updates)
}

/// Apply `action` after verifying its preconditions.
///
/// # Errors
///
/// Returns [`KernelError::IllegalMove`] if any precondition fails.
pub fn apply_checked(state: &AtomState, action: &Relocate) -> Result<AtomState, KernelError> {
    if !preconditions_hold(state, action) {
        return Err(KernelError::illegal_move(format!(
            "{action} is not applicable in this state"
        )));
    }
    Ok(apply(state, action))
}
