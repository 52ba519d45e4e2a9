//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub exam: ExamConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which exam to load and how the session starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamConfig {
    /// TOML catalog file. The built-in practice exam is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Open the session directly in reveal mode (for reviewing answer keys).
    #[serde(default)]
    pub start_revealed: bool,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_true")]
    pub show_passage: bool,
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

impl UiConfig {
    /// Swap an unparseable `timestamp_format` for the default and hand back
    /// the rejected one.
    pub fn sanitize(&mut self) -> Option<String> {
        let invalid = StrftimeItems::new(&self.timestamp_format)
            .any(|item| matches!(item, Item::Error));
        if invalid {
            Some(std::mem::replace(
                &mut self.timestamp_format,
                default_timestamp_format(),
            ))
        } else {
            None
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            show_passage: true,
            grid_columns: default_grid_columns(),
        }
    }
}

/// Diagnostic log settings. Logs go to a file, never to the terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_grid_columns() -> usize {
    5
}
fn default_log_dir() -> String {
    "~/.local/share/examdeck/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(cfg.exam.catalog_path.is_none());
        assert!(!cfg.exam.start_revealed);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M");
        assert!(cfg.ui.show_passage);
        assert_eq!(cfg.ui.grid_columns, 5);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [exam]
            catalog_path = "/tmp/exam.toml"

            [ui]
            grid_columns = 8
            "#,
        )
        .unwrap();
        assert_eq!(cfg.exam.catalog_path, Some(PathBuf::from("/tmp/exam.toml")));
        assert_eq!(cfg.ui.grid_columns, 8);
        assert!(cfg.ui.show_passage);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/examdeck/logs");
    }

    #[test]
    fn test_sanitize_replaces_bad_timestamp_format() {
        let mut ui = UiConfig {
            timestamp_format: "%Q".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(ui.sanitize().as_deref(), Some("%Q"));
        assert_eq!(ui.timestamp_format, "%H:%M");

        ui.timestamp_format = "%Y-%m-%d %H:%M:%S".to_string();
        assert_eq!(ui.sanitize(), None);
        assert_eq!(ui.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.logging.enabled = true;
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert!(back.logging.enabled);
        assert_eq!(back.ui.grid_columns, cfg.ui.grid_columns);
    }
}
