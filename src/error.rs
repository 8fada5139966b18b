//! Error types for CIDR parsing and configuration loading.

use thiserror::Error;

/// Result type alias for CIDR operations.
pub type Result<T> = std::result::Result<T, CidrError>;

/// Input validation failures raised by the CIDR analyzer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Malformed address part, or prefix length missing, non-numeric or above 32.
    #[error("Invalid CIDR block: {input} ({reason})")]
    InvalidCidr { input: String, reason: &'static str },

    /// Malformed IPv4 literal passed to a containment check.
    #[error("Invalid IP address: {input}")]
    InvalidAddress { input: String },
}

impl CidrError {
    pub(crate) fn invalid_cidr(input: &str, reason: &'static str) -> Self {
        CidrError::InvalidCidr {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn invalid_address(input: &str) -> Self {
        CidrError::InvalidAddress {
            input: input.to_string(),
        }
    }

    /// The exact text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            CidrError::InvalidCidr { input, .. } | CidrError::InvalidAddress { input } => input,
        }
    }
}

/// Errors raised while loading deployment metadata.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Error reading config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config JSON did not match the expected shape.
    #[error("Error parsing config JSON at '{path}': {message}")]
    Json { path: String, message: String },

    /// An environment variable held a value of the wrong form.
    #[error("Invalid value for {var}: {message}")]
    InvalidEnv { var: &'static str, message: String },
}
