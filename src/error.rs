//! Error types.
//!
//! Configuration problems are fatal and rejected before any document is
//! checked (exit code 2). Everything else is a runtime error (exit code 1).
//! Ordering violations are never errors; they are reported as lint issues.

use crate::models::category::Category;
use thiserror::Error;

/// Invalid `order` or unreadable configuration file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The order does not list exactly five categories.
    #[error("order must list exactly {expected} categories, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A category appears more than once.
    #[error("category '{0}' appears more than once in order")]
    Duplicate(Category),

    /// A tag outside the fixed category set.
    #[error("unknown category '{0}' (expected one of: inject, input, input.required, output, other)")]
    UnknownCategory(String),

    /// The configuration file exists but could not be parsed.
    #[error("invalid config {path}: {message}")]
    Parse { path: String, message: String },

    /// A value outside its accepted set, e.g. `level = "fatal"`.
    #[error("invalid value '{value}' for {key} (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// The top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
}

impl Error {
    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            Error::Runtime(_) => 1,
        }
    }
}
