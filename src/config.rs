use crate::services::DEFAULT_PREVIEW_BASE_URL;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Classification YAML opened last
    #[serde(default)]
    pub classification_path: String,
    /// Where exports are written; empty means next to the classification file
    #[serde(default)]
    pub export_dir: String,
    #[serde(default = "default_preview_base_url")]
    pub preview_base_url: String,
    /// Prefilled in the import prompt
    #[serde(default)]
    pub last_import_path: String,
}

fn default_preview_base_url() -> String {
    DEFAULT_PREVIEW_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classification_path: String::new(),
            export_dir: String::new(),
            preview_base_url: default_preview_base_url(),
            last_import_path: String::new(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".artist-review"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Directory exports go to.
    ///
    /// Falls back to the classification file's directory, then the working
    /// directory.
    pub fn resolved_export_dir(&self) -> PathBuf {
        if !self.export_dir.is_empty() {
            return PathBuf::from(&self.export_dir);
        }
        Path::new(&self.classification_path)
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"classification_path": "a.yaml"}"#).unwrap();
        assert_eq!(config.classification_path, "a.yaml");
        assert_eq!(config.preview_base_url, DEFAULT_PREVIEW_BASE_URL);
        assert!(config.export_dir.is_empty());
    }

    #[test]
    fn test_export_dir_resolution() {
        let mut config = Config {
            classification_path: "/data/classify/classified_result.yaml".to_string(),
            ..Config::default()
        };
        assert_eq!(config.resolved_export_dir(), PathBuf::from("/data/classify"));

        config.classification_path = "classified_result.yaml".to_string();
        assert_eq!(config.resolved_export_dir(), PathBuf::from("."));

        config.export_dir = "/tmp/out".to_string();
        assert_eq!(config.resolved_export_dir(), PathBuf::from("/tmp/out"));
    }
}
