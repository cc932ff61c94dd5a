use prettytable::{row, Table};

use crate::models::ConnectionConfig;

/// Two-column key/value table of the record (`password` masked).
pub fn config_table(cfg: &ConnectionConfig) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Key", "Value"]);
    for (key, value) in cfg.display_rows() {
        table.add_row(row![key, value]);
    }
    table
}

pub fn show_config(cfg: Option<&ConnectionConfig>) {
    match cfg {
        Some(cfg) => {
            println!("Current SSH Configuration:");
            config_table(cfg).printstd();
        }
        None => {
            println!("No SSH configuration found.");
            println!("Run with --setup to create configuration.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_field() {
        let mut cfg = ConnectionConfig::new("pi@192.168.1.100");
        cfg.extra.insert("password".into(), serde_json::json!("secret"));
        let rendered = config_table(&cfg).to_string();
        for needle in ["hostname", "pi@192.168.1.100", "port", "22", "remote_dir", "auth_method", "key_path", "******"] {
            assert!(rendered.contains(needle), "missing {needle} in\n{rendered}");
        }
        assert!(!rendered.contains("secret"));
    }
}
