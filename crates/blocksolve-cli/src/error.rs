use blocksolve::core::io::relation::RelationFileError;
use blocksolve::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit codes, following the BSD `sysexits.h` convention.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const DATA_ERROR: i32 = 65;
    pub const IO_ERROR: i32 = 74;
    pub const CONFIG_ERROR: i32 = 78;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    BlockSolve(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write results: {0}")]
    Output(#[from] RelationFileError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::BlockSolve(e) => match e {
                EngineError::Input { source } if source.is_io() => exit_code::IO_ERROR,
                EngineError::Input { .. } | EngineError::Store { .. } => exit_code::DATA_ERROR,
                EngineError::Config { .. } => exit_code::CONFIG_ERROR,
                EngineError::Cancelled { .. } | EngineError::Internal(_) => exit_code::FAILURE,
            },
            CliError::Config(_) | CliError::FileParsing { .. } | CliError::Argument(_) => {
                exit_code::CONFIG_ERROR
            }
            CliError::Output(_) | CliError::Io(_) => exit_code::IO_ERROR,
            CliError::Other(_) => exit_code::FAILURE,
        }
    }
}
