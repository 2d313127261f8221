//! # BlockSolve Core Library
//!
//! Discovers *blocks* in a bipartite protein→chemical relation: groups of proteins together
//! with the exact set of chemicals they jointly bind.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ProteinRecord`, `Block`,
//!   `BlockKey`), the validated `SetStore`, hash-set intersection, result formatting and the
//!   text I/O format.
//!
//! - **[`engine`]: The Logic Core.** The concurrent `BlockTable`, the per-run `RunContext`
//!   that owns it, and the two parallel tasks: pairwise discovery and subset absorption.
//!
//! - **[`workflows`]: The Public API.** `workflows::solve` loads a relation file and runs
//!   discovery, absorption and formatting end to end.

pub mod core;
pub mod engine;
pub mod workflows;
