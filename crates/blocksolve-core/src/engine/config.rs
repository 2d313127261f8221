use crate::core::format::RenderOptions;
use crate::core::io::traits::MalformedLinePolicy;
use thiserror::Error;

/// Smallest overlap, in chemicals, that forms a block.
pub const DEFAULT_MIN_OVERLAP: usize = 2;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Protein pairs sharing fewer chemicals than this are discarded.
    pub min_overlap: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsorptionConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub discovery: DiscoveryConfig,
    pub absorption: AbsorptionConfig,
    pub output: RenderOptions,
    pub on_malformed: MalformedLinePolicy,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            discovery: DiscoveryConfig {
                min_overlap: DEFAULT_MIN_OVERLAP,
            },
            absorption: AbsorptionConfig { enabled: true },
            output: RenderOptions::default(),
            on_malformed: MalformedLinePolicy::default(),
        }
    }
}

#[derive(Default)]
pub struct SolveConfigBuilder {
    min_overlap: Option<usize>,
    absorption_enabled: Option<bool>,
    weight_headers: Option<bool>,
    on_malformed: Option<MalformedLinePolicy>,
}

impl SolveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = Some(min_overlap);
        self
    }
    pub fn absorption_enabled(mut self, enabled: bool) -> Self {
        self.absorption_enabled = Some(enabled);
        self
    }
    pub fn weight_headers(mut self, enabled: bool) -> Self {
        self.weight_headers = Some(enabled);
        self
    }
    pub fn on_malformed(mut self, policy: MalformedLinePolicy) -> Self {
        self.on_malformed = Some(policy);
        self
    }

    pub fn build(self) -> Result<SolveConfig, ConfigError> {
        let min_overlap = self
            .min_overlap
            .ok_or(ConfigError::MissingParameter("min_overlap"))?;
        if min_overlap == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "min_overlap",
                reason: "must be at least 1".to_string(),
            });
        }
        let absorption_enabled = self
            .absorption_enabled
            .ok_or(ConfigError::MissingParameter("absorption_enabled"))?;

        Ok(SolveConfig {
            discovery: DiscoveryConfig { min_overlap },
            absorption: AbsorptionConfig {
                enabled: absorption_enabled,
            },
            output: RenderOptions {
                weight_headers: self.weight_headers.unwrap_or(false),
            },
            on_malformed: self.on_malformed.unwrap_or_default(),
        })
    }
}
