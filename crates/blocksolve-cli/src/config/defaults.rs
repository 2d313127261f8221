use blocksolve::core::io::traits::MalformedLinePolicy;
use blocksolve::engine::config::DEFAULT_MIN_OVERLAP;

pub struct DefaultsConfig {
    pub min_overlap: usize,
    pub absorption_enabled: bool,
    pub weight_headers: bool,
    pub on_malformed: MalformedLinePolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
            absorption_enabled: true,
            weight_headers: false,
            on_malformed: MalformedLinePolicy::Abort,
        }
    }
}
