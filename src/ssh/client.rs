use std::path::PathBuf;
use std::time::Duration;

use crate::models::ConnectionConfig;
use super::runner::Invocation;

/// Timeout for short remote commands (probe, mkdir, ls).
pub const REMOTE_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Expanded private key path, only when key auth is selected and the file
/// exists on disk. Otherwise ssh falls back to its own defaults.
pub fn identity_file(cfg: &ConnectionConfig) -> Option<PathBuf> {
    let key = cfg.active_key_path()?;
    let path = PathBuf::from(shellexpand::tilde(key).into_owned());
    path.exists().then_some(path)
}

/// `ssh [-i key] -p <port> <hostname> <remote_cmd>`
pub fn ssh_invocation(cfg: &ConnectionConfig, remote_cmd: &str) -> Invocation {
    let mut inv = Invocation::new("ssh");
    if let Some(id) = identity_file(cfg) {
        inv = inv.arg("-i").arg(id.to_string_lossy());
    }
    inv.arg("-p")
        .arg(cfg.port.to_string())
        .arg(cfg.hostname.as_str())
        .arg(remote_cmd)
        .timeout(REMOTE_COMMAND_TIMEOUT)
}

/// `scp -P <port> [-i key] [-v] <file> <hostname>:<remote_dir>/`
///
/// No timeout: a copy runs as long as it needs. In verbose mode scp writes
/// straight to the terminal.
pub fn scp_invocation(cfg: &ConnectionConfig, local: &str, verbose: bool) -> Invocation {
    let mut inv = Invocation::new("scp").arg("-P").arg(cfg.port.to_string());
    if let Some(id) = identity_file(cfg) {
        inv = inv.arg("-i").arg(id.to_string_lossy());
    }
    if verbose {
        inv = inv.arg("-v").passthrough();
    }
    inv.arg(local).arg(remote_target(cfg))
}

fn remote_target(cfg: &ConnectionConfig) -> String {
    format!("{}:{}/", cfg.hostname, cfg.remote_dir.trim_end_matches('/'))
}
