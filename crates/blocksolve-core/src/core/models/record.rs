use super::ids::{ChemicalId, ProteinId};
use std::collections::HashSet;

/// One input line before validation: the raw protein id, its chemical ids in input
/// order, and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: u32,
    pub chemicals: Vec<u32>,
    pub line: usize,
}

impl RawRecord {
    pub fn new(id: u32, chemicals: Vec<u32>, line: usize) -> Self {
        Self {
            id,
            chemicals,
            line,
        }
    }
}

/// A validated protein and the set of chemicals it binds.
///
/// Records are created by [`SetStore::load`](crate::core::store::SetStore::load) and never
/// mutated afterwards. The insertion index fixes the order in which unordered protein pairs
/// are enumerated: the pair `{a, b}` is visited once, from the record with the lower index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    id: ProteinId,
    chemicals: HashSet<ChemicalId>,
    insertion_index: usize,
}

impl ProteinRecord {
    pub(crate) fn new(
        id: ProteinId,
        chemicals: HashSet<ChemicalId>,
        insertion_index: usize,
    ) -> Self {
        Self {
            id,
            chemicals,
            insertion_index,
        }
    }

    #[inline]
    pub fn id(&self) -> ProteinId {
        self.id
    }

    #[inline]
    pub fn chemicals(&self) -> &HashSet<ChemicalId> {
        &self.chemicals
    }

    #[inline]
    pub fn insertion_index(&self) -> usize {
        self.insertion_index
    }
}
