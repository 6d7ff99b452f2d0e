use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Built-in fallback when neither the environment nor the configuration
/// file names a server.
pub const DEFAULT_SERVER: &str = "localhost:15001";

/// Client-side configuration, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Default server as `host:port`.
    #[serde(default)]
    pub server: Option<String>,
}

impl ClientConfig {
    /// Load from `RESVSTAT_CONFIG` if set, else the default path. A missing
    /// file yields the defaults; a malformed one is a startup error.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("RESVSTAT_CONFIG") {
            return Self::load_from(&expand_tilde(&path));
        }
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .map_err(Error::Config)?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))
            .map_err(Error::Config)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("resvstat")
                .join("config.toml"),
        )
    }

    /// Default server resolution priority: `RESVSTAT_SERVER`, then the
    /// configuration file, then the built-in fallback.
    pub fn default_server(&self) -> String {
        if let Ok(server) = std::env::var("RESVSTAT_SERVER")
            && !server.is_empty()
        {
            return server;
        }
        self.server
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = ClientConfig::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.server, None);
    }

    #[test]
    fn load_reads_server() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "server = \"sched.example.org:15001\"\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.server.as_deref(), Some("sched.example.org:15001"));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "server = [not toml").unwrap();

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.native_code(), 1);
    }
}
