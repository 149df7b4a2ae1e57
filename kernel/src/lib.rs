//! Waypoint Kernel: immutable planning states, actions, and canonical hashing.
//!
//! # API Surface
//!
//! - [`carrier`] -- world states ([`carrier::grid::GridState`],
//!   [`carrier::atom_state::AtomState`]), ground atoms, and canonical
//!   [`carrier::key::StateKey`]s used for dedup
//! - [`operators`] -- pure `apply` functions for sliding moves and block
//!   relocations
//! - [`proof`] -- canonical JSON bytes and domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`
//!
//! One-way only. `proof` is self-contained and does not inspect states.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod error;
pub mod operators;
pub mod proof;

pub use error::KernelError;
