//! Status reporting.
//!
//! A [`Reporter`] is built once in `main` and handed to every operation. The
//! console implementation owns its own `tracing` dispatcher instead of
//! installing a process-wide subscriber.

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

pub trait Reporter {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes timestamped, level-tagged lines to stderr.
pub struct ConsoleReporter {
    dispatch: Dispatch,
}

impl ConsoleReporter {
    /// `verbose` enables debug output; otherwise `RUST_LOG` is honoured,
    /// falling back to `info`.
    pub fn new(verbose: bool) -> Self {
        let filter = if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        Self { dispatch: Dispatch::new(subscriber) }
    }

    fn emit(&self, f: impl FnOnce()) {
        tracing::dispatcher::with_default(&self.dispatch, f);
    }
}

impl Reporter for ConsoleReporter {
    fn debug(&self, message: &str) {
        self.emit(|| tracing::debug!("{message}"));
    }

    fn info(&self, message: &str) {
        self.emit(|| tracing::info!("{message}"));
    }

    fn warn(&self, message: &str) {
        self.emit(|| tracing::warn!("{message}"));
    }

    fn error(&self, message: &str) {
        self.emit(|| tracing::error!("{message}"));
    }
}
