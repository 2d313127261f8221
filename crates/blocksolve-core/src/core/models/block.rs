use super::ids::{ChemicalId, ProteinId};
use std::collections::HashSet;
use std::fmt;

/// Canonical key of a chemical set.
///
/// The key is the ascending sequence of chemical ids, compared and hashed element by
/// element. Two sets share a key exactly when they hold the same ids, whatever order the
/// ids were inserted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(Vec<ChemicalId>);

impl BlockKey {
    pub fn from_set(chemicals: &HashSet<ChemicalId>) -> Self {
        let mut ids: Vec<_> = chemicals.iter().copied().collect();
        ids.sort_unstable();
        Self(ids)
    }

    pub fn chemicals(&self) -> &[ChemicalId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}

/// A set of chemicals together with every protein known to bind all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub chemical_set: HashSet<ChemicalId>,
    pub protein_set: HashSet<ProteinId>,
}

impl Block {
    /// Starts a block from the overlap of a protein pair.
    pub fn from_pair(chemical_set: HashSet<ChemicalId>, a: ProteinId, b: ProteinId) -> Self {
        Self {
            chemical_set,
            protein_set: HashSet::from([a, b]),
        }
    }

    pub fn key(&self) -> BlockKey {
        BlockKey::from_set(&self.chemical_set)
    }

    /// `|proteins| * |chemicals|`, the ordering key of the final output.
    pub fn weight(&self) -> usize {
        self.protein_set.len() * self.chemical_set.len()
    }
}
