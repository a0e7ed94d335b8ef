use std::path::PathBuf;

use crate::reader::DataDir;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "DATA_TOOLS_DATA_DIR";

/// Default bind address for the Streamable HTTP transport.
pub const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8000";

/// Settings resolved once at startup and shared by every tool module.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: DataDir,
}

impl ServerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: DataDir::new(data_dir),
        }
    }

    /// Build the config from an optional override (CLI flag or env),
    /// falling back to the installation's `data` directory.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        Self::new(data_dir.unwrap_or_else(default_data_dir))
    }
}

/// The `data` directory shipped next to the crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
