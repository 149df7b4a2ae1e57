//! Waypoint Search: deterministic A* with an auditable search graph.
//!
//! This crate provides the search layer. It depends only on
//! `waypoint_kernel`; it does NOT depend on `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (states, actions)   (frontier, A*)      (domains, scenarios, CLI)
//! ```
//!
//! # Key types
//!
//! - [`PlanningDomain`]: trait a domain implements to be searchable
//! - [`SearchNodeV1`]: immutable arena node with deterministic ordering
//! - [`BestFirstFrontier`]: open list, closed set and best-g map
//! - [`SearchPolicyV1`]: tie-breaking and recording configuration
//! - [`SearchGraphV1`]: expansion-event audit log with a canonical digest
//! - [`Plan`]: the action sequence returned to callers

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod plan;
pub mod policy;
pub mod search;

pub use contract::{PlanningDomain, Successor};
pub use error::SearchError;
pub use frontier::BestFirstFrontier;
pub use graph::{ExpandEventV1, SearchGraphMetadata, SearchGraphV1, TerminationReasonV1};
pub use node::{FrontierKey, SearchNodeV1};
pub use plan::Plan;
pub use policy::{SearchPolicyV1, TieBreakV1};
pub use search::{find_solution, search, SearchResult};
