//! Waypoint Harness: the bundled planning domains and everything around them.
//!
//! Worlds implement `waypoint_search::PlanningDomain`; the harness owns the
//! scenario file format, text rendering, and the solve-then-replay runner.
//! It does NOT implement search logic; it delegates to `waypoint_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod render;
pub mod runner;
pub mod scenario;
pub mod worlds;
