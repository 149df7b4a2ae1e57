//! Proof module: canonical JSON bytes and content hashing.
//!
//! Nothing in the kernel depends on `proof`; the search and harness crates
//! use it to digest audit artifacts.

pub mod canon;
pub mod hash;
