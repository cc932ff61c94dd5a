use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 22;
pub const DEFAULT_REMOTE_DIR: &str = "~/fpga_work";
pub const DEFAULT_KEY_PATH: &str = "~/.ssh/id_rsa";

/// How `ssh`/`scp` authenticate against the remote host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// Private key file passed with `-i`
    #[default]
    Key,
    /// Let the ssh client prompt for a password
    Password,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Key => f.write_str("key"),
            AuthMethod::Password => f.write_str("password"),
        }
    }
}

/// Paramètres de connexion, stockés dans le répertoire courant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionConfig {
    /// Hostname ou IP, préfixe `user@` optionnel (ex `pi@192.168.1.10`)
    pub hostname: String,
    /// Port SSH (par défaut 22)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Répertoire distant qui reçoit les fichiers
    #[serde(default = "default_remote_dir")]
    pub remote_dir: String,
    #[serde(default)]
    pub auth_method: AuthMethod,
    /// Chemin vers la clé privée (ex: ~/.ssh/id_rsa). Conservé même
    /// quand on repasse en authentification par mot de passe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
    /// Clés inconnues, réécrites telles quelles à la sauvegarde.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_port() -> u16 { DEFAULT_PORT }
fn default_remote_dir() -> String { DEFAULT_REMOTE_DIR.to_string() }

impl ConnectionConfig {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: DEFAULT_PORT,
            remote_dir: DEFAULT_REMOTE_DIR.to_string(),
            auth_method: AuthMethod::Key,
            key_path: Some(DEFAULT_KEY_PATH.to_string()),
            extra: BTreeMap::new(),
        }
    }

    /// Key path to use for authentication, if key auth is selected.
    pub fn active_key_path(&self) -> Option<&str> {
        match self.auth_method {
            AuthMethod::Key => self.key_path.as_deref().filter(|p| !p.trim().is_empty()),
            AuthMethod::Password => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigError::Invalid("hostname is empty".into()));
        }
        if self.auth_method == AuthMethod::Key && self.active_key_path().is_none() {
            return Err(ConfigError::Invalid(
                "key_path is required when auth_method is \"key\"".into(),
            ));
        }
        Ok(())
    }

    /// `(key, value)` pairs for display, `password` masked.
    pub fn display_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("hostname".to_string(), self.hostname.clone()),
            ("port".to_string(), self.port.to_string()),
            ("remote_dir".to_string(), self.remote_dir.clone()),
            ("auth_method".to_string(), self.auth_method.to_string()),
        ];
        if let Some(k) = &self.key_path {
            rows.push(("key_path".to_string(), k.clone()));
        }
        for (k, v) in &self.extra {
            let shown = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let shown = if k == "password" { mask(&shown) } else { shown };
            rows.push((k.clone(), shown));
        }
        rows
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() || secret == "null" {
        "None".to_string()
    } else {
        "*".repeat(secret.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let cfg: ConnectionConfig = serde_json::from_str(r#"{"hostname":"pi@10.0.0.2"}"#).unwrap();
        assert_eq!(cfg.port, 22);
        assert_eq!(cfg.remote_dir, DEFAULT_REMOTE_DIR);
        assert_eq!(cfg.auth_method, AuthMethod::Key);
        assert!(cfg.key_path.is_none());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_auth_method_is_lowercase_on_disk() {
        let mut cfg = ConnectionConfig::new("host");
        cfg.auth_method = AuthMethod::Password;
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["auth_method"], "password");
    }

    #[test]
    fn test_unknown_auth_method_is_rejected() {
        let res = serde_json::from_str::<ConnectionConfig>(
            r#"{"hostname":"h","auth_method":"kerberos"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_password_config_ignores_stale_key() {
        let mut cfg = ConnectionConfig::new("host");
        cfg.auth_method = AuthMethod::Password;
        assert_eq!(cfg.key_path.as_deref(), Some(DEFAULT_KEY_PATH));
        assert_eq!(cfg.active_key_path(), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_key_path_is_invalid_for_key_auth() {
        let mut cfg = ConnectionConfig::new("host");
        cfg.key_path = Some("  ".into());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_display_masks_password() {
        let mut cfg = ConnectionConfig::new("host");
        cfg.extra.insert("password".into(), serde_json::Value::String("hunter2".into()));
        let rows = cfg.display_rows();
        let pw = rows.iter().find(|(k, _)| k == "password").unwrap();
        assert_eq!(pw.1, "*******");
    }
}
