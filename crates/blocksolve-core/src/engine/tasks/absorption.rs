use crate::core::models::block::{Block, BlockKey};
use crate::core::models::ids::ProteinId;
use crate::core::sets;
use crate::engine::context::RunContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorptionStats {
    pub blocks_grown: usize,
    pub proteins_added: usize,
}

/// Proteins of every strict superset of `x` that `x` does not already hold.
///
/// `by_size` must be sorted ascending by chemical-set size, so the candidates for a strict
/// superset are exactly the suffix holding larger sets.
fn absorbed_proteins(x: &Block, by_size: &[(BlockKey, Block)]) -> HashSet<ProteinId> {
    let size = x.chemical_set.len();
    let start = by_size.partition_point(|(_, y)| y.chemical_set.len() <= size);

    let mut gained = HashSet::new();
    for (_, y) in &by_size[start..] {
        if sets::is_subset(&x.chemical_set, &y.chemical_set) {
            gained.extend(
                y.protein_set
                    .iter()
                    .filter(|p| !x.protein_set.contains(*p))
                    .copied(),
            );
        }
    }
    gained
}

/// Propagates protein membership from each block to every block whose chemical set is a
/// strict subset of its own.
///
/// Inner reads come from a snapshot taken before the pass, and each worker writes only
/// the block of its outer iteration. Because the subset relation is transitive, a block
/// reads the pre-pass members of every superset in its chain directly, so one pass reaches
/// the fixed point and a second pass changes nothing.
#[instrument(skip_all, name = "absorption_task")]
pub fn run(context: &RunContext) -> Result<AbsorptionStats, EngineError> {
    context.check_cancelled("absorption")?;
    let mut by_size = context.table.snapshot();
    by_size.sort_unstable_by_key(|(_, block)| block.chemical_set.len());
    info!(blocks = by_size.len(), "Absorbing subset blocks.");

    context.reporter.report(Progress::TaskStart {
        total_steps: by_size.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = by_size.iter();

    #[cfg(feature = "parallel")]
    let iterator = by_size.par_iter();

    let added: Vec<usize> = iterator
        .map(|(key, x)| -> Result<usize, EngineError> {
            context.check_cancelled("absorption")?;
            let gained = absorbed_proteins(x, &by_size);
            if !gained.is_empty() && !context.table.extend_proteins(key, &gained) {
                return Err(EngineError::Internal(format!(
                    "block {} disappeared from the table during absorption",
                    key
                )));
            }
            context.reporter.report(Progress::TaskIncrement);
            Ok(gained.len())
        })
        .collect::<Result<_, _>>()?;

    context.reporter.report(Progress::TaskFinish);

    let stats = AbsorptionStats {
        blocks_grown: added.iter().filter(|&&n| n > 0).count(),
        proteins_added: added.iter().sum(),
    };
    debug!(?stats, "Absorption statistics.");
    info!(
        blocks_grown = stats.blocks_grown,
        "Subset absorption complete."
    );
    Ok(stats)
}
