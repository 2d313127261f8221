use crate::core::models::block::{Block, BlockKey};
use crate::core::models::ids::{ChemicalId, ProteinId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;

/// Concurrent map from canonical key to block, owned by a single run.
///
/// Every mutation goes through a per-shard lock held for the whole read-modify-write, so
/// two workers upserting the same key can neither lose a block nor interleave their
/// protein insertions.
#[derive(Debug, Default)]
pub struct BlockTable {
    blocks: DashMap<BlockKey, Block>,
}

impl BlockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that proteins `a` and `b` share exactly `overlap`.
    ///
    /// Returns `true` if this call created the block.
    pub fn upsert(&self, overlap: HashSet<ChemicalId>, a: ProteinId, b: ProteinId) -> bool {
        match self.blocks.entry(BlockKey::from_set(&overlap)) {
            Entry::Occupied(mut entry) => {
                let proteins = &mut entry.get_mut().protein_set;
                proteins.insert(a);
                proteins.insert(b);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(Block::from_pair(overlap, a, b));
                true
            }
        }
    }

    /// Adds `proteins` to the block stored under `key`.
    ///
    /// Returns `false` if no such block exists.
    pub fn extend_proteins<'p>(
        &self,
        key: &BlockKey,
        proteins: impl IntoIterator<Item = &'p ProteinId>,
    ) -> bool {
        match self.blocks.get_mut(key) {
            Some(mut block) => {
                block.protein_set.extend(proteins);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &BlockKey) -> Option<Block> {
        self.blocks.get(key).map(|block| block.clone())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Clones every entry. Later mutations of the table are not visible in the copy.
    pub fn snapshot(&self) -> Vec<(BlockKey, Block)> {
        self.blocks
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks.into_iter().map(|(_, block)| block).collect()
    }
}
