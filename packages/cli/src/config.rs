use dwd_workspace::ContentRepository;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "dwd.config.json";

/// dwd configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Content JSON file
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Where backups go before each save
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Generated JS module
    #[serde(default = "default_out_path")]
    pub out_path: String,

    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built site to serve next to the content resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<String>,
}

fn default_data_path() -> String {
    "content.data.json".to_string()
}

fn default_backup_dir() -> String {
    "content.backups".to_string()
}

fn default_out_path() -> String {
    "src/content.jsx".to_string()
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    5173
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Repository with every path resolved against `cwd`
    pub fn repository(&self, cwd: &str) -> ContentRepository {
        let root = PathBuf::from(cwd);
        ContentRepository::new(
            root.join(&self.data_path),
            root.join(&self.backup_dir),
            root.join(&self.out_path),
        )
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn get_static_dir(&self, cwd: &str) -> Option<PathBuf> {
        self.static_dir
            .as_ref()
            .map(|dir| PathBuf::from(cwd).join(dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            backup_dir: default_backup_dir(),
            out_path: default_out_path(),
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "dataPath": "data/site.json",
            "backupDir": "data/backups",
            "outPath": "web/content.js",
            "host": "0.0.0.0",
            "port": 8080,
            "staticDir": "dist"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_path, "data/site.json");
        assert_eq!(config.backup_dir, "data/backups");
        assert_eq!(config.out_path, "web/content.js");
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, Some("dist".to_string()));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "port": 3000 }"#).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, "content.data.json");
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.static_dir, None);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.addr().to_string(), "127.0.0.1:5173");
        assert_eq!(config.out_path, "src/content.jsx");
        assert_eq!(config.backup_dir, "content.backups");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::load(temp.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_repository_paths_are_relative_to_cwd() {
        let config = Config::default();
        let repository = config.repository("/srv/site");
        assert_eq!(repository.data_path(), PathBuf::from("/srv/site/content.data.json"));
        assert_eq!(repository.output_path(), PathBuf::from("/srv/site/src/content.jsx"));
    }
}
