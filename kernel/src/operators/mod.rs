//! Operators module: pure action application for both domains.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod relocate;
pub mod slide;
