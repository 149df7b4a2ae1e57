//! `AtomState`: a blocks-world state as a mapping from ground atom to truth.
//!
//! # Open-world lookup
//!
//! Atoms absent from the mapping are false. Atoms explicitly mapped to
//! `false` are kept as bookkeeping but never influence the canonical key:
//! two states with the same set of true atoms are the same search state.
//!
//! # Validation
//!
//! [`AtomState::new`] rejects states whose `on` atoms do not chain down to
//! the table. States derived by `operators::relocate::apply` skip this check;
//! the successor generator only produces physically consistent moves.

use std::collections::BTreeMap;

use crate::carrier::atom::{Atom, TABLE};
use crate::carrier::key::StateKey;
use crate::error::KernelError;

/// Immutable blocks-world state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomState {
    atoms: BTreeMap<Atom, bool>,
}

impl AtomState {
    /// Build a validated state from `(atom, truth)` pairs.
    ///
    /// # Errors
    ///
    /// - [`KernelError::InvalidArgument`] if the same atom is given
    ///   conflicting truth values.
    /// - [`KernelError::InvalidState`] if a block has more than one support,
    ///   a support chain is cyclic, a chain ends at a block with no support,
    ///   or a block that carries another is marked clear.
    pub fn new(atoms: impl IntoIterator<Item = (Atom, bool)>) -> Result<Self, KernelError> {
        let atoms = collect_assignment(atoms)?;
        validate_support_chains(&atoms)?;
        Ok(Self { atoms })
    }

    /// Truth of `atom` (absent atoms are false).
    #[must_use]
    pub fn holds(&self, atom: &Atom) -> bool {
        self.atoms.get(atom).copied().unwrap_or(false)
    }

    /// Explicit assignment of `atom`, if any.
    #[must_use]
    pub fn get(&self, atom: &Atom) -> Option<bool> {
        self.atoms.get(atom).copied()
    }

    /// Whether `clear(block)` holds.
    #[must_use]
    pub fn is_clear(&self, block: &str) -> bool {
        self.holds(&Atom::clear_unchecked(block))
    }

    /// Whether `on(block, support)` holds.
    #[must_use]
    pub fn is_on(&self, block: &str, support: &str) -> bool {
        self.holds(&Atom::on_unchecked(block, support))
    }

    /// All explicit assignments in atom order.
    pub fn iter(&self) -> impl Iterator<Item = (&Atom, bool)> {
        self.atoms.iter().map(|(a, &v)| (a, v))
    }

    /// Atoms currently mapped to `true`, in atom order.
    pub fn true_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(|(_, &v)| v).map(|(a, _)| a)
    }

    /// Blocks resting directly on `support`, in atom order.
    #[must_use]
    pub fn blocks_on(&self, support: &str) -> Vec<&str> {
        self.true_atoms()
            .filter_map(|atom| match atom {
                Atom::On { block, support: s } if s == support => Some(block.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Canonical key: renderings of the true atoms, sorted, joined by `;`.
    #[must_use]
    pub fn canonical_key(&self) -> StateKey {
        let mut rendered: Vec<String> = self.true_atoms().map(ToString::to_string).collect();
        rendered.sort();
        StateKey::new(rendered.join(";"))
    }

    /// Copy of this state with `updates` assigned in order.
    pub(crate) fn with_assignments(&self, updates: impl IntoIterator<Item = (Atom, bool)>) -> Self {
        let mut atoms = self.atoms.clone();
        for (atom, value) in updates {
            atoms.insert(atom, value);
        }
        Self { atoms }
    }
}

/// A partial goal assignment over ground atoms.
///
/// Only atoms mapped to `true` are enforced. Atoms mapped to `false`, and
/// atoms not mentioned, impose no constraint on a candidate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomGoal {
    atoms: BTreeMap<Atom, bool>,
}

impl AtomGoal {
    /// Build a goal from `(atom, truth)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] if the same atom is given
    /// conflicting truth values.
    pub fn new(atoms: impl IntoIterator<Item = (Atom, bool)>) -> Result<Self, KernelError> {
        Ok(Self {
            atoms: collect_assignment(atoms)?,
        })
    }

    /// Goal atoms mapped to `true`.
    pub fn required(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(|(_, &v)| v).map(|(a, _)| a)
    }

    /// All goal assignments, including ignored `false` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Atom, bool)> {
        self.atoms.iter().map(|(a, &v)| (a, v))
    }

    /// Number of required atoms that do not hold in `state`.
    #[must_use]
    pub fn unsatisfied_count(&self, state: &AtomState) -> usize {
        self.required().filter(|atom| !state.holds(atom)).count()
    }

    /// Whether every required atom holds in `state`.
    #[must_use]
    pub fn is_satisfied_by(&self, state: &AtomState) -> bool {
        self.required().all(|atom| state.holds(atom))
    }
}

fn collect_assignment(
    atoms: impl IntoIterator<Item = (Atom, bool)>,
) -> Result<BTreeMap<Atom, bool>, KernelError> {
    let mut map = BTreeMap::new();
    for (atom, value) in atoms {
        if let Some(previous) = map.insert(atom.clone(), value) {
            if previous != value {
                return Err(KernelError::invalid_argument(format!(
                    "atom {atom} assigned both {previous} and {value}"
                )));
            }
        }
    }
    Ok(map)
}

/// Every block with a true `on` atom must reach [`TABLE`] through a finite,
/// acyclic chain of unique supports, and no block carrying another may be
/// clear.
fn validate_support_chains(atoms: &BTreeMap<Atom, bool>) -> Result<(), KernelError> {
    let mut support: BTreeMap<&str, &str> = BTreeMap::new();
    for (atom, &value) in atoms {
        if let (Atom::On { block, support: s }, true) = (atom, value) {
            if let Some(existing) = support.insert(block.as_str(), s.as_str()) {
                return Err(KernelError::invalid_state(format!(
                    "block {block} rests on both {existing} and {s}"
                )));
            }
        }
    }

    for (&block, &below) in &support {
        if below != TABLE && atoms.get(&Atom::clear_unchecked(below)) == Some(&true) {
            return Err(KernelError::invalid_state(format!(
                "block {below} is marked clear but carries {block}"
            )));
        }
    }

    for (&block, &first) in &support {
        let mut current = first;
        let mut hops = 0usize;
        while current != TABLE {
            if current == block || hops > support.len() {
                return Err(KernelError::invalid_state(format!(
                    "support chain of block {block} is cyclic"
                )));
            }
            current = support.get(current).copied().ok_or_else(|| {
                KernelError::invalid_state(format!(
                    "block {block} rests on {current}, which has no support down to the table"
                ))
            })?;
            hops += 1;
        }
    }
    Ok(())
}
