use crate::cli::SolveArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use blocksolve::{
    core::io::{relation::CsvRelationFile, traits::RelationFile},
    engine::progress::ProgressReporter,
    workflows,
};
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: SolveArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;
    let config = &app_config.core_config;

    let store = workflows::solve::load(&app_config.input_path, config)?;
    if store.is_empty() {
        warn!("Input {:?} contains no protein records.", &app_config.input_path);
    }

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core solve workflow...");
    let result = workflows::solve::run(&store, config, &reporter)?;

    info!(
        pairs = result.discovery.pairs_examined,
        qualifying = result.discovery.pairs_qualifying,
        blocks = result.blocks.len(),
        "Workflow finished."
    );
    if let Some(absorption) = result.absorption {
        info!(
            blocks_grown = absorption.blocks_grown,
            proteins_added = absorption.proteins_added,
            "Absorption summary."
        );
    }

    match &app_config.output_path {
        Some(path) => {
            info!("Writing {} block(s) to {:?}", result.blocks.len(), path);
            CsvRelationFile::write_to_path(&result.blocks, &config.output, path)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            CsvRelationFile::write_to(&result.blocks, &config.output, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
