use crate::config::ConfigStore;
use crate::error::PromptError;
use crate::models::{AuthMethod, ConnectionConfig, DEFAULT_KEY_PATH, DEFAULT_PORT, DEFAULT_REMOTE_DIR};
use crate::prompt::Console;
use crate::report::Reporter;
use crate::ssh::remote::test_connection;
use crate::ssh::runner::CommandRunner;
use super::show::config_table;

/// Interactive create/edit of the connection record.
///
/// Every flow ends with a probe; the record is saved only if the probe
/// succeeds. `None` means cancelled or probe failed.
pub struct Configurator<'a> {
    console: &'a mut dyn Console,
    runner: &'a dyn CommandRunner,
    store: &'a ConfigStore,
    reporter: &'a dyn Reporter,
}

impl<'a> Configurator<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        runner: &'a dyn CommandRunner,
        store: &'a ConfigStore,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self { console, runner, store, reporter }
    }

    /// `--setup`: create a record, or offer edit/overwrite/cancel if one exists.
    pub fn setup(&mut self) -> Option<ConnectionConfig> {
        if let Some(existing) = self.store.load(self.reporter) {
            match self.existing_choice(&existing) {
                Ok(ExistingChoice::Edit) => return self.edit(&existing),
                Ok(ExistingChoice::Overwrite) => self.console.show("\nCreating new configuration..."),
                Ok(ExistingChoice::Cancel) => {
                    self.console.show("Setup cancelled.");
                    return None;
                }
                Err(e) => return self.abort(e),
            }
        }
        self.create()
    }

    pub fn create(&mut self) -> Option<ConnectionConfig> {
        match self.prompt_new() {
            Ok(cfg) => self.finish(cfg),
            Err(e) => self.abort(e),
        }
    }

    pub fn edit(&mut self, existing: &ConnectionConfig) -> Option<ConnectionConfig> {
        match self.prompt_edits(existing) {
            Ok(cfg) => self.finish(cfg),
            Err(e) => self.abort(e),
        }
    }

    fn existing_choice(&mut self, existing: &ConnectionConfig) -> Result<ExistingChoice, PromptError> {
        self.console.show("SSH Configuration already exists!");
        self.console.show("Current configuration:");
        self.console.show(config_table(existing).to_string().trim_end());
        self.console.show("\nOptions:");
        self.console.show("1. Edit existing configuration");
        self.console.show("2. Create new configuration (overwrite)");
        self.console.show("3. Cancel");

        loop {
            match self.console.ask("Choose option (1-3):")?.trim() {
                "1" => return Ok(ExistingChoice::Edit),
                "2" => return Ok(ExistingChoice::Overwrite),
                "3" => return Ok(ExistingChoice::Cancel),
                _ => self.console.show("Please enter 1, 2, or 3."),
            }
        }
    }

    fn prompt_new(&mut self) -> Result<ConnectionConfig, PromptError> {
        self.console.show("SSH Configuration Setup");
        self.console.show(&"=".repeat(25));

        let hostname = loop {
            let h = self.console.ask("Remote hostname/IP (e.g., pi@192.168.1.100):")?;
            let h = h.trim();
            if !h.is_empty() {
                break h.to_string();
            }
            self.console.show("Hostname cannot be empty.");
        };

        let port = parse_port(&self.console.ask(&format!("SSH port (default: {DEFAULT_PORT}):"))?)
            .unwrap_or(DEFAULT_PORT);

        let remote_dir = non_blank(self.console.ask(&format!(
            "Remote working directory (default: {DEFAULT_REMOTE_DIR}):"
        ))?)
        .unwrap_or_else(|| DEFAULT_REMOTE_DIR.to_string());

        self.show_auth_menu();
        let auth_method = loop {
            match parse_auth_choice(&self.console.ask("Choose authentication method (1 or 2):")?) {
                Some(m) => break m,
                None => self.console.show("Please enter 1 or 2."),
            }
        };

        let key_path = match auth_method {
            AuthMethod::Key => Some(
                non_blank(self.console.ask(&format!("SSH key path (default: {DEFAULT_KEY_PATH}):"))?)
                    .unwrap_or_else(|| DEFAULT_KEY_PATH.to_string()),
            ),
            AuthMethod::Password => None,
        };

        Ok(ConnectionConfig {
            hostname,
            port,
            remote_dir,
            auth_method,
            key_path,
            extra: Default::default(),
        })
    }

    /// Blank answers keep the current value. Switching to password leaves
    /// any previous `key_path` in place.
    fn prompt_edits(&mut self, existing: &ConnectionConfig) -> Result<ConnectionConfig, PromptError> {
        self.console.show("Edit SSH Configuration");
        self.console.show(&"=".repeat(25));
        self.console.show("Current values shown in [brackets]. Press Enter to keep current value.");

        let mut cfg = existing.clone();

        if let Some(h) = non_blank(self.console.ask(&format!("Remote hostname/IP [{}]:", cfg.hostname))?) {
            cfg.hostname = h;
        }
        if let Some(p) = parse_port(&self.console.ask(&format!("SSH port [{}]:", cfg.port))?) {
            cfg.port = p;
        }
        if let Some(d) = non_blank(self.console.ask(&format!("Remote working directory [{}]:", cfg.remote_dir))?) {
            cfg.remote_dir = d;
        }

        self.console.show(&format!("\nCurrent authentication method: {}", cfg.auth_method));
        self.show_auth_menu();
        let choice = self
            .console
            .ask("Choose authentication method (1 or 2) [Enter to keep current]:")?;
        if let Some(m) = parse_auth_choice(&choice) {
            cfg.auth_method = m;
        }

        if cfg.auth_method == AuthMethod::Key {
            let current = cfg.key_path.clone().unwrap_or_else(|| DEFAULT_KEY_PATH.to_string());
            let answer = non_blank(self.console.ask(&format!("SSH key path [{current}]:"))?);
            cfg.key_path = Some(answer.unwrap_or(current));
        }

        Ok(cfg)
    }

    fn show_auth_menu(&mut self) {
        self.console.show("1. SSH key (recommended)");
        self.console.show("2. Password");
    }

    fn finish(&mut self, cfg: ConnectionConfig) -> Option<ConnectionConfig> {
        self.console.show("\nTesting SSH connection...");
        if test_connection(self.runner, &cfg, self.reporter) {
            self.console.show("✓ SSH connection successful!");
            self.store.save_reported(&cfg, self.reporter);
            Some(cfg)
        } else {
            self.console.show("✗ SSH connection failed. Please check your configuration.");
            None
        }
    }

    fn abort(&mut self, e: PromptError) -> Option<ConnectionConfig> {
        match e {
            PromptError::Cancelled => self.console.show("Setup cancelled."),
            other => self.reporter.error(&other.to_string()),
        }
        None
    }
}

enum ExistingChoice {
    Edit,
    Overwrite,
    Cancel,
}

fn non_blank(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Digits only; anything else (including out-of-range values) is `None`.
fn parse_port(answer: &str) -> Option<u16> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok()
}

fn parse_auth_choice(answer: &str) -> Option<AuthMethod> {
    match answer.trim() {
        "1" => Some(AuthMethod::Key),
        "2" => Some(AuthMethod::Password),
        _ => None,
    }
}
