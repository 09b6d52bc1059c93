//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the notes database.
pub const DATABASE_FILE: &str = "glacier_notes.db";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notes database file
    pub database: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/glacier/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glacier")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `glacier_notes.db` in the user data directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(Self::default_database_path)
    }

    fn default_database_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("glacier").join(DATABASE_FILE),
            None => PathBuf::from(DATABASE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_no_database() {
        let config = Config::default();
        assert!(config.database.is_none());
    }

    #[test]
    fn database_path_prefers_cli_arg() {
        let config = Config {
            database: Some(PathBuf::from("/config/notes.db")),
        };
        let cli_db = PathBuf::from("/cli/notes.db");
        assert_eq!(
            config.database_path(Some(&cli_db)),
            PathBuf::from("/cli/notes.db")
        );
    }

    #[test]
    fn database_path_falls_back_to_config() {
        let config = Config {
            database: Some(PathBuf::from("/config/notes.db")),
        };
        assert_eq!(config.database_path(None), PathBuf::from("/config/notes.db"));
    }

    #[test]
    fn database_path_defaults_to_data_file() {
        let config = Config::default();
        assert!(config.database_path(None).ends_with(DATABASE_FILE));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("glacier/config.toml"));
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn load_from_parses_database() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = \"/srv/notes.db\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.database, Some(PathBuf::from("/srv/notes.db")));
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("failed to parse config file"));
    }
}
