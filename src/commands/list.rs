use crate::error::OperationError;
use crate::models::ConnectionConfig;
use crate::report::Reporter;
use crate::ssh::remote::remote_listing;
use crate::ssh::runner::CommandRunner;

/// Print `ls -la` of the remote working directory.
pub fn list_remote_files(
    runner: &dyn CommandRunner,
    cfg: Option<&ConnectionConfig>,
    reporter: &dyn Reporter,
) -> bool {
    let Some(cfg) = cfg else {
        reporter.error(&OperationError::ConfigMissing.to_string());
        return false;
    };

    match remote_listing(runner, cfg, reporter) {
        Some(out) => {
            println!("\nFiles in {}:", cfg.remote_dir);
            println!("{}", "=".repeat(40));
            println!("{}", out.stdout);
            true
        }
        None => false,
    }
}
