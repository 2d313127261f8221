//! Reading the protein→chemical relation and writing discovered blocks.
//!
//! The text format is line oriented: `proteinId,chemId,chemId,...` on input and
//! `C[c1 c2 ...] P[p1 p2 ...]` on output. [`traits::RelationFile`] is the format-agnostic
//! interface; [`relation::CsvRelationFile`] implements it for the comma-separated format.

pub mod relation;
pub mod traits;
