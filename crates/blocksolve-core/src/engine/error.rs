use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::relation::RelationFileError;
use crate::core::store::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read relation input: {source}")]
    Input {
        #[from]
        source: RelationFileError,
    },

    #[error("Invalid protein records: {source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Phase '{phase}' was cancelled before completion")]
    Cancelled { phase: &'static str },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
