// config.rs — Runtime configuration resolved from CLI args and defaults.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listening port.
    pub port: u16,
    /// Directory holding the SQLite database (created on first startup).
    pub data_dir: PathBuf,
    /// Log level directive (trace, debug, info, warn, error).
    pub log: String,
}

impl Config {
    pub fn new(port: Option<u16>, data_dir: Option<PathBuf>, log: Option<String>) -> Self {
        Self {
            port: port.unwrap_or(DEFAULT_PORT),
            data_dir: data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            log: log.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_when_unset() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.log, "info");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::new(Some(8080), Some(PathBuf::from("/tmp/taskd")), None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/taskd"));
        assert_eq!(config.log, "info");
    }
}
