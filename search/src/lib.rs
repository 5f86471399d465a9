//! Bisect Search: halving interval search over sorted slices.
//!
//! This crate provides the search layer. It depends only on `bisect_kernel`
//! (for trace canonicalization and hashing); it does NOT depend on
//! `bisect_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! bisect_kernel  ←  bisect_search  ←  bisect_harness
//! (canon, hash)     (search, traces)   (scenarios, runner)
//! ```
//!
//! # Key items
//!
//! - [`search::search`] — locate a target in a sorted slice
//! - [`search::SearchResult`] — `Found(index)` or `NotFound`
//! - [`trace::search_traced`] — the same search, with a [`trace::ProbeTraceV1`]
//! - [`order::first_inversion`] — up-front sortedness check for untrusted input

#![forbid(unsafe_code)]

pub mod error;
pub mod order;
pub mod search;
pub mod trace;
