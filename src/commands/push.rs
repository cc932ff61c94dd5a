use std::path::Path;

use crate::error::OperationError;
use crate::models::ConnectionConfig;
use crate::report::Reporter;
use crate::ssh::client::scp_invocation;
use crate::ssh::remote::ensure_remote_directory;
use crate::ssh::runner::CommandRunner;

/// Tally of one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PushSummary {
    pub transferred: usize,
    /// Missing locally, never attempted
    pub skipped: usize,
    pub failed: usize,
    /// Input count, skipped files included
    pub total: usize,
}

impl PushSummary {
    pub fn is_complete(&self) -> bool {
        self.transferred == self.total
    }
}

/// Push every file and report; true only if all of them made it.
pub fn push_files(
    runner: &dyn CommandRunner,
    cfg: Option<&ConnectionConfig>,
    files: &[String],
    verbose: bool,
    reporter: &dyn Reporter,
) -> bool {
    match try_push(runner, cfg, files, verbose, reporter) {
        Ok(summary) => summary.is_complete(),
        Err(e) => {
            reporter.error(&e.to_string());
            false
        }
    }
}

/// Copy `files` in order into the configured remote directory.
///
/// Batch-level problems (no config, no files, remote directory can't be
/// created) abort before anything is copied. Per-file problems are logged
/// and only show up in the summary.
pub fn try_push(
    runner: &dyn CommandRunner,
    cfg: Option<&ConnectionConfig>,
    files: &[String],
    verbose: bool,
    reporter: &dyn Reporter,
) -> Result<PushSummary, OperationError> {
    let cfg = cfg.ok_or(OperationError::ConfigMissing)?;
    if files.is_empty() {
        return Err(OperationError::NoFiles);
    }
    if !ensure_remote_directory(runner, cfg, &cfg.remote_dir, reporter) {
        return Err(OperationError::RemoteDirectory(cfg.remote_dir.clone()));
    }

    let mut summary = PushSummary { total: files.len(), ..Default::default() };

    for file in files {
        if !Path::new(file).exists() {
            reporter.warn(&format!("File not found: {file}"));
            summary.skipped += 1;
            continue;
        }

        let inv = scp_invocation(cfg, file, verbose);
        if verbose {
            reporter.info(&format!("Executing: {}", inv.command_line()));
        }

        match runner.run(&inv) {
            Ok(out) if out.success() => {
                reporter.info(&format!("✓ Pushed: {file}"));
                summary.transferred += 1;
            }
            Ok(out) => {
                reporter.error(&format!("✗ Failed to push {file}: {}", out.stderr.trim_end()));
                summary.failed += 1;
            }
            Err(e) => {
                reporter.error(&format!("✗ Error pushing {file}: {e}"));
                summary.failed += 1;
            }
        }
    }

    reporter.info(&format!(
        "Push complete: {}/{} files transferred successfully",
        summary.transferred, summary.total
    ));
    Ok(summary)
}
