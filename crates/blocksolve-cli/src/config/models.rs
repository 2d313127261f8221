use blocksolve::engine::config::SolveConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    /// `None` writes to standard output.
    pub output_path: Option<PathBuf>,
    pub core_config: SolveConfig,
}
