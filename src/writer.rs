//! Result serialization
//!
//! Packages a finished batch plus its provenance (sources and modifiers
//! used) into one of the supported output encodings. Text and CSV emit the
//! bare suggestion list; JSON and YAML emit the full result envelope.

use crate::errors::{NamerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output encodings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One suggestion per line
    #[default]
    Text,
    /// Quoted suggestions joined by commas, on one line
    Csv,
    /// JSON result envelope
    Json,
    /// YAML result envelope
    Yaml,
}

impl OutputFormat {
    /// All supported formats, in listing order.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    /// The format name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Get a human-readable description of this format for listings.
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text separated by a new line.",
            OutputFormat::Csv => "Plain text separated by commas.",
            OutputFormat::Json => "Object representation conforming to http://www.json.org/",
            OutputFormat::Yaml => "Object representation conforming to http://yaml.org/",
        }
    }

    /// Parse a format name, falling back to plain text when unknown.
    pub fn parse_lossy(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "yaml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = NamerError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value).ok_or_else(|| NamerError::unknown_format(value))
    }
}

// ============================================================================
// Result Envelope
// ============================================================================

/// Provenance block of the result envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Source entries the run used, as given
    pub sources: Vec<String>,
    /// Modifier tag codes, in order
    pub modifiers: Vec<String>,
}

/// The emitted result structure.
///
/// This is the only persisted shape the tool produces:
/// `{ config: { sources, modifiers }, suggestions }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Provenance for the run
    pub config: EnvelopeConfig,
    /// The generated suggestions, in production order
    pub suggestions: Vec<String>,
}

impl ResultEnvelope {
    /// Assemble an envelope from run provenance and a suggestion list.
    pub fn new(sources: Vec<String>, modifiers: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            config: EnvelopeConfig { sources, modifiers },
            suggestions,
        }
    }
}

// ============================================================================
// Result Writer
// ============================================================================

/// Serializes a result envelope into the configured format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultWriter {
    format: OutputFormat,
}

impl ResultWriter {
    /// Create a writer for a format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// The configured format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Serialize the envelope. Text and CSV carry only the suggestion
    /// list; JSON and YAML carry the whole envelope.
    pub fn write(&self, envelope: &ResultEnvelope) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(envelope.suggestions.join("\n")),
            OutputFormat::Csv => Ok(Self::to_csv(&envelope.suggestions)),
            OutputFormat::Json => Ok(serde_json::to_string(envelope)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(envelope)?),
        }
    }

    /// One CSV record: every value quoted, embedded quotes doubled.
    fn to_csv(suggestions: &[String]) -> String {
        suggestions
            .iter()
            .map(|s| format!("\"{}\"", s.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(",")
    }
}
