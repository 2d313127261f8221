use crate::core::models::block::{Block, BlockKey};
use crate::core::models::ids::{ChemicalId, ProteinId};
use itertools::Itertools;
use std::fmt;

/// Output options that do not change which blocks are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a `# weight N` line before the first block of each weight.
    pub weight_headers: bool,
}

/// A block ready for printing: both id lists ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBlock {
    pub chemicals: Vec<ChemicalId>,
    pub proteins: Vec<ProteinId>,
    pub weight: usize,
}

impl fmt::Display for FormattedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C[{}] P[{}]",
            self.chemicals.iter().join(" "),
            self.proteins.iter().join(" ")
        )
    }
}

/// Removes the sentinel protein id from a block.
pub fn clean(block: &mut Block) {
    block.protein_set.retain(|id| !id.is_sentinel());
}

/// Cleans, weighs and orders blocks for output.
///
/// Blocks are sorted ascending by weight; equal weights are ordered by chemical key and
/// then by protein list so the output never depends on table iteration order.
pub fn format_blocks<I>(blocks: I) -> Vec<FormattedBlock>
where
    I: IntoIterator<Item = Block>,
{
    blocks
        .into_iter()
        .map(|mut block| {
            clean(&mut block);
            let weight = block.weight();
            let chemicals = BlockKey::from_set(&block.chemical_set).chemicals().to_vec();
            let proteins = block.protein_set.into_iter().sorted_unstable().collect();
            FormattedBlock {
                chemicals,
                proteins,
                weight,
            }
        })
        .sorted_unstable_by(|a, b| {
            a.weight
                .cmp(&b.weight)
                .then_with(|| a.chemicals.cmp(&b.chemicals))
                .then_with(|| a.proteins.cmp(&b.proteins))
        })
        .collect()
}
