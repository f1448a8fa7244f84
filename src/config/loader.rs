use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, trace};

use super::{ConfigSource, Defines};
use crate::error::ConfigError;
use crate::utils::unquote_string;

/// Obtains the configuration mapping for a pass.
///
/// Relative file paths are resolved against `base_dir`, never against the
/// process working directory.
pub fn load(source: &ConfigSource, base_dir: &Path) -> Result<Defines, ConfigError> {
    match source {
        ConfigSource::Inline(value) => Defines::from_value(value.clone()),
        ConfigSource::File(path) => load_file(path, base_dir),
    }
}

pub fn load_file(path: &Path, base_dir: &Path) -> Result<Defines, ConfigError> {
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    };
    trace!(path = %resolved.display(), "loading defines");

    if !resolved.is_file() {
        return Err(ConfigError::file_not_found(&resolved));
    }

    let content = fs::read_to_string(&resolved)
        .map_err(|e| ConfigError::read_error(&resolved, e.to_string()))?;

    let extension = resolved
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let value: Value = match extension {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::parse_error(&resolved, e.to_string()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::parse_error(&resolved, e.to_string()))?,
        _ => return Err(ConfigError::unsupported_format(extension)),
    };

    let defines = Defines::from_value(value)?;
    debug!(path = %resolved.display(), count = defines.len(), "loaded defines");
    Ok(defines)
}

/// Parses a `KEY=VALUE` define. The value is read as JSON when it is valid
/// JSON and kept as a plain string otherwise.
pub fn parse_define(define: &str) -> Result<(String, Value), ConfigError> {
    let (key, raw) = define
        .split_once('=')
        .ok_or_else(|| ConfigError::invalid_define(define))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::invalid_define(define));
    }

    let value = serde_json::from_str::<Value>(raw.trim())
        .unwrap_or_else(|_| Value::String(unquote_string(raw)));
    Ok((key.to_string(), value))
}
