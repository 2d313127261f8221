//! # Workflows Module
//!
//! Top-level entry points that tie the [`core`](crate::core) and
//! [`engine`](crate::engine) layers together.
//!
//! - **Solve Workflow** ([`solve`]) - Loading a relation file and running discovery,
//!   absorption and formatting end to end.

pub mod solve;
