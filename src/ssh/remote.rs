//! Short remote commands run over `ssh`: connectivity probe, `mkdir -p`
//! and `ls -la`.

use crate::models::ConnectionConfig;
use crate::report::Reporter;
use super::client::ssh_invocation;
use super::runner::{CommandOutput, CommandRunner};

pub const PROBE_MARKER: &str = "SSH connection test successful";

/// True iff ssh exits 0 and echoes [`PROBE_MARKER`] back.
pub fn test_connection(
    runner: &dyn CommandRunner,
    cfg: &ConnectionConfig,
    reporter: &dyn Reporter,
) -> bool {
    let inv = ssh_invocation(cfg, &format!("echo \"{PROBE_MARKER}\""));
    reporter.debug(&format!("Probing: {}", inv.command_line()));
    match runner.run(&inv) {
        Ok(out) => out.success() && out.stdout.contains(PROBE_MARKER),
        Err(e) => {
            reporter.debug(&format!("SSH connection test failed: {e}"));
            false
        }
    }
}

pub fn ensure_remote_directory(
    runner: &dyn CommandRunner,
    cfg: &ConnectionConfig,
    remote_dir: &str,
    reporter: &dyn Reporter,
) -> bool {
    let inv = ssh_invocation(cfg, &format!("mkdir -p {remote_dir}"));
    match runner.run(&inv) {
        Ok(out) => out.success(),
        Err(e) => {
            reporter.debug(&format!("Failed to create remote directory: {e}"));
            false
        }
    }
}

/// Raw `ls -la` output of the configured remote directory.
pub fn remote_listing(
    runner: &dyn CommandRunner,
    cfg: &ConnectionConfig,
    reporter: &dyn Reporter,
) -> Option<CommandOutput> {
    let inv = ssh_invocation(cfg, &format!("ls -la {}", cfg.remote_dir));
    match runner.run(&inv) {
        Ok(out) if out.success() => Some(out),
        Ok(out) => {
            reporter.error(&format!("Failed to list remote files: {}", out.stderr.trim_end()));
            None
        }
        Err(e) => {
            reporter.error(&format!("Error listing remote files: {e}"));
            None
        }
    }
}
