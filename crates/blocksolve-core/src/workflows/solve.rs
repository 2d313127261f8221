use crate::core::format::{self, FormattedBlock};
use crate::core::io::relation::CsvRelationFile;
use crate::core::io::traits::RelationFile;
use crate::core::store::SetStore;
use crate::engine::config::SolveConfig;
use crate::engine::context::{CancellationToken, RunContext};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::absorption::{self, AbsorptionStats};
use crate::engine::tasks::discovery::{self, DiscoveryStats};
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub blocks: Vec<FormattedBlock>,
    pub discovery: DiscoveryStats,
    /// `None` when absorption was disabled.
    pub absorption: Option<AbsorptionStats>,
}

/// Reads and validates a relation file with the configured malformed-line policy.
#[instrument(skip_all, name = "load_relation")]
pub fn load(path: &Path, config: &SolveConfig) -> Result<SetStore, EngineError> {
    info!("Loading protein records from {:?}", path);
    let raw = CsvRelationFile::read_from_path(path, config.on_malformed)?;
    let store = SetStore::load(raw)?;
    info!(proteins = store.len(), "Protein records loaded.");
    Ok(store)
}

#[instrument(skip_all, name = "solve_workflow")]
pub fn run(
    store: &SetStore,
    config: &SolveConfig,
    reporter: &ProgressReporter,
) -> Result<SolveResult, EngineError> {
    run_with_cancellation(store, config, reporter, CancellationToken::new())
}

/// Runs discovery, absorption and formatting, checking `token` at every outer-loop step.
pub fn run_with_cancellation(
    store: &SetStore,
    config: &SolveConfig,
    reporter: &ProgressReporter,
    token: CancellationToken,
) -> Result<SolveResult, EngineError> {
    let context = RunContext::new(config, reporter).with_cancellation(token);

    // === Phase 1: Pairwise discovery ===
    let discovery = reporter.phase("Discovering Blocks", || discovery::run(store, &context))?;

    // === Phase 2: Subset absorption ===
    let absorption = if config.absorption.enabled {
        Some(reporter.phase("Absorbing Subsets", || absorption::run(&context))?)
    } else {
        info!("Subset absorption disabled; skipping.");
        reporter.report(Progress::Message("Subset absorption skipped".to_string()));
        None
    };

    // === Phase 3: Clean, weigh and order ===
    let blocks = reporter.phase("Formatting Results", || {
        format::format_blocks(context.table.into_blocks())
    });

    info!(blocks = blocks.len(), "Workflow complete.");
    Ok(SolveResult {
        blocks,
        discovery,
        absorption,
    })
}
