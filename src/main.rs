use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ssh_push::config::cwd_config_path;
use ssh_push::prompt::InquireConsole;
use ssh_push::report::ConsoleReporter;
use ssh_push::ssh::ProcessRunner;
use ssh_push::{App, Cli, ConfigStore};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let reporter = ConsoleReporter::new(cli.verbose);
    let store = ConfigStore::new(cwd_config_path());
    let mut console = InquireConsole;

    let mut app = App {
        runner: &ProcessRunner,
        store: &store,
        reporter: &reporter,
        console: &mut console,
        work_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        verbose: cli.verbose,
    };

    if app.run(&cli.action()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
