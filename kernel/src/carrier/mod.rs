//! Carrier module: immutable world states and their canonical keys.
//!
//! Depends on nothing internal except [`crate::error`].

pub mod atom;
pub mod atom_state;
pub mod grid;
pub mod key;
