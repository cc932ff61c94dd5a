use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::ConnectionConfig;
use crate::report::Reporter;

/// Reads and writes the connection record at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record. A missing file or `{}` yields `None`; a broken file
    /// is reported as a warning and also yields `None`.
    pub fn load(&self, reporter: &dyn Reporter) -> Option<ConnectionConfig> {
        match self.try_load() {
            Ok(cfg) => cfg,
            Err(e) => {
                reporter.warn(&format!("Failed to load config file: {e}"));
                None
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<ConnectionConfig>, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ConfigError::Io { path: self.path.clone(), source }),
        };

        let value: serde_json::Value = serde_json::from_str(&content)?;
        match value.as_object() {
            Some(obj) if obj.is_empty() => return Ok(None),
            Some(_) => {}
            None => return Err(ConfigError::Invalid("expected a JSON object".into())),
        }

        let cfg: ConnectionConfig = serde_json::from_value(value)?;
        cfg.validate()?;
        Ok(Some(cfg))
    }

    /// Write the record (temp file, then rename into place).
    pub fn save(&self, cfg: &ConnectionConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(cfg)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, format!("{json}\n"))
            .map_err(|source| ConfigError::Io { path: tmp.clone(), source })?;

        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(ConfigError::Io { path: self.path.clone(), source });
        }
        Ok(())
    }

    /// Save and report the outcome; failures don't stop the caller.
    pub fn save_reported(&self, cfg: &ConnectionConfig, reporter: &dyn Reporter) -> bool {
        match self.save(cfg) {
            Ok(()) => {
                reporter.info(&format!("Configuration saved to {}", self.path.display()));
                true
            }
            Err(e) => {
                reporter.error(&format!("Failed to save config: {e}"));
                false
            }
        }
    }
}
