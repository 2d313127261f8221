use crate::core::models::record::ProteinRecord;
use crate::core::sets;
use crate::core::store::SetStore;
use crate::engine::context::RunContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    pub pairs_examined: u64,
    pub pairs_qualifying: u64,
    pub blocks: usize,
}

/// Pairs `a` with every record inserted after it and upserts each qualifying overlap.
///
/// Returns the number of qualifying pairs.
fn discover_from(a: &ProteinRecord, records: &[ProteinRecord], context: &RunContext) -> u64 {
    let min_overlap = context.config.discovery.min_overlap;
    if a.chemicals().len() < min_overlap {
        return 0;
    }

    let mut qualifying = 0;
    for b in &records[a.insertion_index() + 1..] {
        let overlap = sets::intersect(a.chemicals(), b.chemicals());
        if overlap.len() < min_overlap {
            continue;
        }
        context.table.upsert(overlap, a.id(), b.id());
        qualifying += 1;
    }
    qualifying
}

#[instrument(skip_all, name = "block_discovery_task")]
pub fn run(store: &SetStore, context: &RunContext) -> Result<DiscoveryStats, EngineError> {
    context.check_cancelled("discovery")?;
    let records = store.records();
    info!(
        proteins = records.len(),
        pairs = store.pair_count(),
        min_overlap = context.config.discovery.min_overlap,
        "Discovering blocks."
    );

    context.reporter.report(Progress::TaskStart {
        total_steps: records.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = records.iter();

    #[cfg(feature = "parallel")]
    let iterator = records.par_iter();

    let per_protein: Vec<u64> = iterator
        .map(|a| -> Result<u64, EngineError> {
            context.check_cancelled("discovery")?;
            let qualifying = discover_from(a, records, context);
            context.reporter.report(Progress::TaskIncrement);
            Ok(qualifying)
        })
        .collect::<Result<_, _>>()?;

    context.reporter.report(Progress::TaskFinish);

    let stats = DiscoveryStats {
        pairs_examined: store.pair_count(),
        pairs_qualifying: per_protein.iter().sum(),
        blocks: context.table.len(),
    };
    debug!(?stats, "Discovery statistics.");
    info!(blocks = stats.blocks, "Block discovery complete.");
    Ok(stats)
}
