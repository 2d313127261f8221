//! # Core Module
//!
//! Stateless building blocks of block discovery: the data model, the set store, set
//! operations, result formatting, and the text I/O format.
//!
//! - **Data Model** ([`models`]) - Identifiers, protein records, blocks and canonical keys
//! - **Set Store** ([`store`]) - Validated, insertion-ordered protein records
//! - **Set Operations** ([`sets`]) - Intersection and subset tests on hash sets
//! - **Formatting** ([`format`]) - Sentinel cleanup, weighting and output ordering
//! - **File I/O** ([`io`]) - Reading the relation and writing blocks

pub mod format;
pub mod io;
pub mod models;
pub mod sets;
pub mod store;
