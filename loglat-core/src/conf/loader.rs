use crate::conf::error::ConfigError;
use crate::conf::types::LoglatConfig;
use std::fs;
use std::path::Path;

/// Parse a config file. No semantic validation happens here.
pub fn load_config(path: &Path) -> Result<LoglatConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// Parse `path` when given, otherwise start from defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<LoglatConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(LoglatConfig::default()),
    }
}
