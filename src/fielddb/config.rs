use crate::error::{FieldError, Result};
use crate::transport::ContentType;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const TOKEN_FILENAME: &str = "token.dat";
const DEFAULT_HOST: &str = "workcard.fun";

/// Configuration for fielddb, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    /// Remote host, e.g. "workcard.fun" or "https://db.example.com"
    #[serde(default = "default_host")]
    pub host: String,

    /// Content type sent with every request
    #[serde(default)]
    pub content_type: ContentType,

    /// Token file location. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_path: Option<PathBuf>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            content_type: ContentType::default(),
            token_path: None,
        }
    }
}

impl FieldConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FieldError::Io)?;
        let config: FieldConfig =
            serde_json::from_str(&content).map_err(FieldError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FieldError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FieldError::Serialization)?;
        fs::write(config_path, content).map_err(FieldError::Io)?;
        Ok(())
    }

    /// Scheme and host, with `http://` added when the host carries no scheme.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }

    pub fn collections_url(&self) -> String {
        format!("{}/api/collections", self.base_url())
    }

    pub fn connect_url(&self) -> String {
        format!("{}/api/connect", self.base_url())
    }

    pub fn token_path(&self) -> Result<PathBuf> {
        match &self.token_path {
            Some(path) => Ok(path.clone()),
            None => Ok(default_data_dir()?.join(TOKEN_FILENAME)),
        }
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "fielddb", "fielddb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FieldError::Config("Could not determine data dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FieldConfig::default();
        assert_eq!(config.host, "workcard.fun");
        assert_eq!(config.content_type, ContentType::Json);
        assert_eq!(
            config.collections_url(),
            "http://workcard.fun/api/collections"
        );
        assert_eq!(config.connect_url(), "http://workcard.fun/api/connect");
    }

    #[test]
    fn test_host_with_scheme_kept() {
        let config = FieldConfig {
            host: "https://db.example.com/".to_string(),
            ..FieldConfig::default()
        };
        assert_eq!(config.connect_url(), "https://db.example.com/api/connect");
    }

    #[test]
    fn test_explicit_token_path() {
        let config = FieldConfig {
            token_path: Some(PathBuf::from("/tmp/fielddb/token.dat")),
            ..FieldConfig::default()
        };
        assert_eq!(
            config.token_path().unwrap(),
            PathBuf::from("/tmp/fielddb/token.dat")
        );
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = FieldConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("conf");

        let config = FieldConfig {
            host: "localhost:5000".to_string(),
            content_type: ContentType::MultipartFormData,
            token_path: Some(dir.join("token.dat")),
        };
        config.save(&dir).unwrap();

        let loaded = FieldConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"host": "localhost:5000"}"#,
        )
        .unwrap();

        let loaded = FieldConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.host, "localhost:5000");
        assert_eq!(loaded.content_type, ContentType::Json);
        assert_eq!(loaded.token_path, None);
    }
}
