//! Couche configuration : emplacement du fichier + I/O JSON (lecture/écriture).
pub mod path;
pub mod io;

pub use path::{config_path, cwd_config_path, CONFIG_FILE_NAME};
pub use io::ConfigStore;
