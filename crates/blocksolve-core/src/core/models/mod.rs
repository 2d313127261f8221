//! Data model shared by every stage of block discovery.
//!
//! - [`ids`] - Strongly typed protein and chemical identifiers with an explicit sentinel.
//! - [`record`] - Raw input records and the validated, immutable [`record::ProteinRecord`].
//! - [`block`] - [`block::Block`] and its canonical [`block::BlockKey`].

pub mod block;
pub mod ids;
pub mod record;
