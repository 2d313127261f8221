use crate::core::models::ids::{ChemicalId, ProteinId};
use crate::core::models::record::{ProteinRecord, RawRecord};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate protein id {id} on line {line} (first defined on line {first_line})")]
    DuplicateProteinId {
        id: ProteinId,
        first_line: usize,
        line: usize,
    },
    #[error("Line {line}: {kind} id 0 is reserved and cannot be used")]
    SentinelId { line: usize, kind: &'static str },
}

/// Immutable, insertion-ordered collection of validated protein records.
#[derive(Debug, Clone, Default)]
pub struct SetStore {
    records: Vec<ProteinRecord>,
}

impl SetStore {
    /// Validates raw records and assigns each its 0-based insertion index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SentinelId`] if a protein or chemical id is `0`, and
    /// [`StoreError::DuplicateProteinId`] if two records share a protein id.
    pub fn load<I>(raw_records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut records = Vec::new();
        let mut line_by_id = HashMap::new();

        for raw in raw_records {
            let id = ProteinId::new(raw.id);
            if id.is_sentinel() {
                return Err(StoreError::SentinelId {
                    line: raw.line,
                    kind: "protein",
                });
            }
            if raw.chemicals.contains(&0) {
                return Err(StoreError::SentinelId {
                    line: raw.line,
                    kind: "chemical",
                });
            }

            match line_by_id.entry(id) {
                Entry::Occupied(first) => {
                    return Err(StoreError::DuplicateProteinId {
                        id,
                        first_line: *first.get(),
                        line: raw.line,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(raw.line);
                }
            }

            let insertion_index = records.len();
            let chemicals = raw.chemicals.into_iter().map(ChemicalId::new).collect();
            records.push(ProteinRecord::new(id, chemicals, insertion_index));
        }

        debug!(proteins = records.len(), "Protein records loaded into set store.");
        Ok(Self { records })
    }

    /// Records in insertion order; `records()[i].insertion_index() == i`.
    pub fn records(&self) -> &[ProteinRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of unordered protein pairs discovery will examine.
    pub fn pair_count(&self) -> u64 {
        let n = self.records.len() as u64;
        n * n.saturating_sub(1) / 2
    }
}
