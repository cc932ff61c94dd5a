use std::path::{Path, PathBuf};

/// Configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".ssh_push_config.json";

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Path of the config file in the process working directory.
pub fn cwd_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}
