//! Error types for strength-dict-core.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::dictionaries::LogicalName;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure to load one of the dictionary assets.
///
/// Every variant that concerns a specific asset carries its [`LogicalName`],
/// so the message always says which asset broke.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset file does not exist.
    #[error("asset '{name}' not found at {path}")]
    Missing {
        /// Asset that could not be located.
        name: LogicalName,
        /// Path that was probed.
        path: Utf8PathBuf,
    },

    /// The asset exists but could not be read.
    #[error("failed to read asset '{name}' from {path}")]
    Read {
        /// Asset being read.
        name: LogicalName,
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The asset is not valid JSON for its wire format.
    #[error("asset '{name}' is malformed")]
    Malformed {
        /// Asset being decoded.
        name: LogicalName,
        /// Decoder error.
        source: serde_json::Error,
    },

    /// The asset decoded but its typed form could not be built.
    #[error("asset '{name}' is invalid: {reason}")]
    Invalid {
        /// Asset being built.
        name: LogicalName,
        /// What was wrong.
        reason: String,
    },

    /// A name that is not one of the six logical names.
    #[error("unknown asset name: {}. Use: {}", .0, LogicalName::available())]
    UnknownName(String),
}

impl AssetError {
    /// The asset this error refers to, if any.
    pub const fn name(&self) -> Option<LogicalName> {
        match self {
            Self::Missing { name, .. }
            | Self::Read { name, .. }
            | Self::Malformed { name, .. }
            | Self::Invalid { name, .. } => Some(*name),
            Self::UnknownName(_) => None,
        }
    }

    pub(crate) fn invalid(name: LogicalName, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias using [`AssetError`].
pub type AssetResult<T> = Result<T, AssetError>;
