use super::config::SolveConfig;
use super::error::EngineError;
use super::progress::ProgressReporter;
use super::table::BlockTable;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag polled by the parallel phases at every outer-loop step.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything one discovery run shares between its workers.
///
/// The block table lives here rather than in process-wide state; it is dropped, or handed
/// to the formatter, when the run ends.
pub struct RunContext<'a> {
    pub config: &'a SolveConfig,
    pub reporter: &'a ProgressReporter<'a>,
    pub table: BlockTable,
    cancel: CancellationToken,
}

impl<'a> RunContext<'a> {
    pub fn new(config: &'a SolveConfig, reporter: &'a ProgressReporter<'a>) -> Self {
        Self {
            config,
            reporter,
            table: BlockTable::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[inline]
    pub fn check_cancelled(&self, phase: &'static str) -> Result<(), EngineError> {
        if self.cancel.is_cancelled() {
            Err(EngineError::Cancelled { phase })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_one_flag() {
        let token = CancellationToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn context_reports_cancellation_with_phase_name() {
        let config = SolveConfig::default();
        let reporter = ProgressReporter::new();
        let token = CancellationToken::new();
        let context = RunContext::new(&config, &reporter).with_cancellation(token.clone());

        assert!(context.check_cancelled("discovery").is_ok());
        token.cancel();
        assert!(matches!(
            context.check_cancelled("discovery"),
            Err(EngineError::Cancelled {
                phase: "discovery"
            })
        ));
    }
}
