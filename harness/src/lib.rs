//! Bisect Harness: scenario-level orchestration for the search core.
//!
//! The harness loads a scenario (a sorted sequence plus targets), checks the
//! sortedness precondition up front, runs each target through
//! `bisect_search::trace::search_traced`, and packages the outcomes as a
//! digest-bound report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `bisect_search`. Logging and presentation live here, not in the core.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod scenario;
