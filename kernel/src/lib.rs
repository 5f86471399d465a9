//! Bisect Kernel: canonical bytes and content hashes for search artifacts.
//!
//! # API Surface
//!
//! - [`canon::canonical_json_bytes`] -- the single JSON-to-bytes path used for hashing
//! - [`hash::canonical_hash`] -- domain-separated SHA-256 over those bytes
//!
//! # Module Dependency Direction
//!
//! `canon` and `hash` are independent of each other. Callers canonicalize
//! first, then hash. Nothing in the kernel depends on the search crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;
