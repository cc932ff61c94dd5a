//! Library root for ssh-push
pub mod models;
pub mod error;
pub mod report;
pub mod prompt;
pub mod local;

pub mod config;
pub mod ssh;
pub mod commands;
pub mod cli;
pub mod app;

#[cfg(test)]
pub(crate) mod test_support;

// Convenience re-exports
pub use app::App;
pub use cli::{Action, Cli};
pub use config::ConfigStore;
pub use models::{AuthMethod, ConnectionConfig};
