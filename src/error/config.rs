use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported config format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("config root must be a mapping, found {found}")]
    NotAMapping { found: String },

    #[error("invalid define '{define}': expected KEY=VALUE")]
    InvalidDefine { define: String },
}

impl ConfigError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn not_a_mapping(found: impl Into<String>) -> Self {
        Self::NotAMapping {
            found: found.into(),
        }
    }

    pub fn invalid_define(define: impl Into<String>) -> Self {
        Self::InvalidDefine {
            define: define.into(),
        }
    }
}
