use std::io::{self, Write};
use std::path::PathBuf;

use clap::CommandFactory;

use crate::cli::{Action, Cli};
use crate::commands::{list_remote_files, push_files, show_config, Configurator};
use crate::config::ConfigStore;
use crate::error::OperationError;
use crate::local::collect_non_hidden_files;
use crate::models::ConnectionConfig;
use crate::prompt::Console;
use crate::report::Reporter;
use crate::ssh::remote::test_connection;
use crate::ssh::runner::CommandRunner;

/// Everything one run needs, wired up by `main`.
pub struct App<'a> {
    pub runner: &'a dyn CommandRunner,
    pub store: &'a ConfigStore,
    pub reporter: &'a dyn Reporter,
    pub console: &'a mut dyn Console,
    /// Directory scanned by `--all`
    pub work_dir: PathBuf,
    pub verbose: bool,
}

impl App<'_> {
    /// Run one action; `true` maps to exit code 0.
    pub fn run(&mut self, action: &Action) -> bool {
        match action {
            Action::Setup => {
                Configurator::new(&mut *self.console, self.runner, self.store, self.reporter)
                    .setup()
                    .is_some()
            }
            Action::Edit => match self.require_config() {
                Some(cfg) => {
                    Configurator::new(&mut *self.console, self.runner, self.store, self.reporter)
                        .edit(&cfg)
                        .is_some()
                }
                None => false,
            },
            Action::ShowConfig => {
                show_config(self.load().as_ref());
                true
            }
            Action::Test => {
                let Some(cfg) = self.require_config() else { return false };
                if test_connection(self.runner, &cfg, self.reporter) {
                    self.console.show("✓ SSH connection successful!");
                    true
                } else {
                    self.console.show("✗ SSH connection failed.");
                    false
                }
            }
            Action::List => list_remote_files(self.runner, self.load().as_ref(), self.reporter),
            Action::PushAll => {
                let files: Vec<String> = collect_non_hidden_files(&self.work_dir, self.reporter)
                    .into_iter()
                    .map(|name| self.work_dir.join(name).to_string_lossy().into_owned())
                    .collect();
                if files.is_empty() {
                    return false;
                }
                self.push(&files)
            }
            Action::Push(files) => self.push(files),
            Action::Help => self.print_help(&mut io::stdout()),
        }
    }

    fn print_help(&self, out: &mut impl Write) -> bool {
        match Cli::command().write_help(out).and_then(|_| out.flush()) {
            Ok(()) => true,
            Err(e) => {
                self.reporter.error(&format!("Failed to print help: {e}"));
                false
            }
        }
    }

    fn push(&self, files: &[String]) -> bool {
        push_files(self.runner, self.load().as_ref(), files, self.verbose, self.reporter)
    }

    fn load(&self) -> Option<ConnectionConfig> {
        self.store.load(self.reporter)
    }

    fn require_config(&self) -> Option<ConnectionConfig> {
        let cfg = self.load();
        if cfg.is_none() {
            self.reporter.error(&OperationError::ConfigMissing.to_string());
        }
        cfg
    }
}
