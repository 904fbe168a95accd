use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DESTINATION: &str = "arquivos_organizados";
pub const DEFAULT_LOG_FILE: &str = "organization_log.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Used when the destination prompt is left blank.
    pub default_destination: PathBuf,
    pub log_file: PathBuf,
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_destination: PathBuf::from(DEFAULT_DESTINATION),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verify: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(Into::into)
    }

    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map(Self::load).unwrap_or_else(|| Ok(Self::default()))
    }

    /// Command-line flags take precedence over file values.
    pub fn with_overrides(self, log_file: Option<PathBuf>, verify: bool) -> Self {
        Self {
            log_file: log_file.unwrap_or(self.log_file),
            verify: verify || self.verify,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_destination, PathBuf::from("arquivos_organizados"));
        assert_eq!(config.log_file, PathBuf::from("organization_log.log"));
        assert!(!config.verify);
    }

    #[test]
    fn config_save_load() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");

        let config = Config {
            default_destination: PathBuf::from("/srv/sorted"),
            verify: true,
            ..Default::default()
        };
        config.save(&config_path).unwrap();

        assert_eq!(Config::load(&config_path).unwrap(), config);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "verify": true }"#).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert!(config.verify);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn flags_override_file_values() {
        let config = Config {
            log_file: PathBuf::from("from-file.log"),
            ..Default::default()
        };

        let merged = config
            .clone()
            .with_overrides(Some(PathBuf::from("from-flag.log")), true);
        assert_eq!(merged.log_file, PathBuf::from("from-flag.log"));
        assert!(merged.verify);

        let untouched = config.with_overrides(None, false);
        assert_eq!(untouched.log_file, PathBuf::from("from-file.log"));
        assert!(!untouched.verify);
    }

    #[test]
    fn verify_from_file_survives_absent_flag() {
        let config = Config {
            verify: true,
            ..Default::default()
        };
        assert!(config.with_overrides(None, false).verify);
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_or_default(Some(&dir.path().join("none.json"))).is_err());
    }
}
