//! Everything that talks to the remote host through `ssh`/`scp`.
pub mod client;
pub mod remote;
pub mod runner;

pub use remote::{ensure_remote_directory, test_connection};
pub use runner::{CommandOutput, CommandRunner, Invocation, ProcessRunner};
