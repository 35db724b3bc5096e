//! Error types for codenamer
//!
//! This module defines the error types used throughout the library.
//! Fatal conditions (bad configuration, failed fetches) are errors here;
//! the recoverable "not enough unique suggestions" condition is *not* an
//! error — it is reported on the batch itself (see
//! [`SuggestionBatch::exhausted`](crate::engine::SuggestionBatch::exhausted)).

use crate::types::PosTag;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NamerError>;

/// Main error type for codenamer
#[derive(Error, Debug, Clone)]
pub enum NamerError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A requested modifier tag is not in the recognized tag enumeration
    #[error("Unknown modifier tag: {code}")]
    UnknownModifier { code: String },

    /// A requested output format name is not recognized
    #[error("Unknown output format: {name}")]
    UnknownFormat { name: String },

    /// Word-list mode was requested with no source words
    #[error("No sources provided: {message}")]
    EmptySources { message: String },

    /// Fetching a source failed (transport error or non-success status)
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The lexicon file could not be loaded
    #[error("Failed to load lexicon: {message}")]
    Lexicon { message: String },

    /// A requested tag has no candidate words in the index
    #[error("No candidate words for tag {tag}")]
    EmptyTagPool { tag: PosTag },

    /// JSON/YAML serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O error (message-carrying so the enum stays cloneable)
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl NamerError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown modifier error
    pub fn unknown_modifier(code: impl Into<String>) -> Self {
        Self::UnknownModifier { code: code.into() }
    }

    /// Create an unknown format error
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }

    /// Create an empty sources error
    pub fn empty_sources(message: impl Into<String>) -> Self {
        Self::EmptySources {
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a lexicon load error
    pub fn lexicon(message: impl Into<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
        }
    }

    /// Create an empty tag pool error
    pub fn empty_tag_pool(tag: PosTag) -> Self {
        Self::EmptyTagPool { tag }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check whether this error is a configuration problem
    /// (as opposed to a runtime failure such as a fetch error)
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. }
                | Self::UnknownModifier { .. }
                | Self::UnknownFormat { .. }
                | Self::EmptySources { .. }
        )
    }
}

impl From<serde_json::Error> for NamerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for NamerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for NamerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
