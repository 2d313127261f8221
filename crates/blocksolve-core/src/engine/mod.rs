//! # Engine Module
//!
//! The stateful part of block discovery: the concurrent block table, the per-run context
//! that owns it, and the two parallel tasks that fill and refine it.
//!
//! - **Configuration** ([`config`]) - Overlap threshold, absorption switch, output options
//! - **Run Context** ([`context`]) - Per-run block table, progress reporter, cancellation
//! - **Block Table** ([`table`]) - Canonical key → block map with atomic upserts
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping I/O and validation errors

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod table;
pub mod tasks;
