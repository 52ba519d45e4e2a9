pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("examdeck")
        .join("config.toml")
}

pub fn config_exists() -> bool {
    config_path().exists()
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

/// Write the config file, creating the directory if needed.
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Catalog to open for this run. A path from the command line wins and is
/// never written back into the config.
pub fn resolve_catalog_path(config: &AppConfig, cli: Option<PathBuf>) -> Option<PathBuf> {
    cli.or_else(|| config.exam.catalog_path.clone())
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let cfg = load_config_from(Path::new("/nonexistent/examdeck/config.toml")).unwrap();
        assert_eq!(cfg.ui.grid_columns, 5);
    }

    #[test]
    fn test_cli_catalog_is_not_persisted() {
        let dir = std::env::temp_dir().join(format!("examdeck-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let cfg = AppConfig::default();

        let cli = PathBuf::from("/tmp/one-off.toml");
        assert_eq!(resolve_catalog_path(&cfg, Some(cli.clone())), Some(cli));

        save_config_to(&cfg, &path).unwrap();
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.exam.catalog_path.is_none());
        assert_eq!(resolve_catalog_path(&reloaded, None), None);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_configured_catalog_used_without_cli_arg() {
        let mut cfg = AppConfig::default();
        cfg.exam.catalog_path = Some(PathBuf::from("/srv/exams/b1.toml"));
        assert_eq!(
            resolve_catalog_path(&cfg, None),
            Some(PathBuf::from("/srv/exams/b1.toml"))
        );
        assert_eq!(
            resolve_catalog_path(&cfg, Some(PathBuf::from("/tmp/x.toml"))),
            Some(PathBuf::from("/tmp/x.toml"))
        );
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/var/log/x"), PathBuf::from("/var/log/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
