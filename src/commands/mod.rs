//! User-facing operations, one per command-line flag.
pub mod list;
pub mod push;
pub mod setup;
pub mod show;

pub use list::list_remote_files;
pub use push::{push_files, try_push, PushSummary};
pub use setup::Configurator;
pub use show::show_config;
