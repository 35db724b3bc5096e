//! Core types for codenamer
//!
//! This module defines the fundamental data structures used throughout the
//! library: the part-of-speech tag enumeration, tagged words, and the
//! generation configuration.

use crate::errors::{NamerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Part-of-Speech Tags
// ============================================================================

/// Part-of-speech tags recognized as modifiers.
///
/// Tags serialize as their Penn Treebank codes (`"JJ"`, `"NN"`, ...) so that
/// envelope output and modifier lists round-trip through the same short form
/// users pass on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Coordinating conjunction (CC)
    #[serde(rename = "CC")]
    Conjunction,
    /// Determiner (DT)
    #[serde(rename = "DT")]
    Determiner,
    /// Preposition or subordinating conjunction (IN)
    #[serde(rename = "IN")]
    Preposition,
    /// Adjective (JJ)
    #[serde(rename = "JJ")]
    Adjective,
    /// Noun, singular or mass (NN)
    #[serde(rename = "NN")]
    Noun,
    /// Noun, plural (NNS)
    #[serde(rename = "NNS")]
    NounPlural,
    /// Proper noun, singular (NNP)
    #[serde(rename = "NNP")]
    ProperNoun,
    /// Proper noun, plural (NNPS)
    #[serde(rename = "NNPS")]
    ProperNounPlural,
    /// Adverb (RB)
    #[serde(rename = "RB")]
    Adverb,
    /// Interjection (UH)
    #[serde(rename = "UH")]
    Interjection,
    /// Verb, base form (VB)
    #[serde(rename = "VB")]
    Verb,
    /// Verb, past tense (VBD)
    #[serde(rename = "VBD")]
    VerbPastTense,
    /// Verb, gerund or present participle (VBG)
    #[serde(rename = "VBG")]
    VerbGerund,
    /// Verb, past participle (VBN)
    #[serde(rename = "VBN")]
    VerbPastParticiple,
}

impl PosTag {
    /// All recognized tags, in listing order.
    pub const ALL: [PosTag; 14] = [
        PosTag::Conjunction,
        PosTag::Determiner,
        PosTag::Preposition,
        PosTag::Adjective,
        PosTag::Noun,
        PosTag::NounPlural,
        PosTag::ProperNoun,
        PosTag::ProperNounPlural,
        PosTag::Adverb,
        PosTag::Interjection,
        PosTag::Verb,
        PosTag::VerbPastTense,
        PosTag::VerbGerund,
        PosTag::VerbPastParticiple,
    ];

    /// Get the Penn Treebank code for this tag.
    pub fn code(&self) -> &'static str {
        match self {
            PosTag::Conjunction => "CC",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Adjective => "JJ",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Adverb => "RB",
            PosTag::Interjection => "UH",
            PosTag::Verb => "VB",
            PosTag::VerbPastTense => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
        }
    }

    /// Parse from a Penn Treebank code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CC" => Some(PosTag::Conjunction),
            "DT" => Some(PosTag::Determiner),
            "IN" => Some(PosTag::Preposition),
            "JJ" => Some(PosTag::Adjective),
            "NN" => Some(PosTag::Noun),
            "NNS" => Some(PosTag::NounPlural),
            "NNP" => Some(PosTag::ProperNoun),
            "NNPS" => Some(PosTag::ProperNounPlural),
            "RB" => Some(PosTag::Adverb),
            "UH" => Some(PosTag::Interjection),
            "VB" => Some(PosTag::Verb),
            "VBD" => Some(PosTag::VerbPastTense),
            "VBG" => Some(PosTag::VerbGerund),
            "VBN" => Some(PosTag::VerbPastParticiple),
            _ => None,
        }
    }

    /// Get a human-readable description of this tag for listings.
    pub fn description(&self) -> &'static str {
        match self {
            PosTag::Conjunction => "conjunction",
            PosTag::Determiner => "determiner",
            PosTag::Preposition => "preposition",
            PosTag::Adjective => "adjective",
            PosTag::Noun => "noun",
            PosTag::NounPlural => "noun plural",
            PosTag::ProperNoun => "noun proper",
            PosTag::ProperNounPlural => "noun proper plural",
            PosTag::Adverb => "adverb",
            PosTag::Interjection => "interjection",
            PosTag::Verb => "verb",
            PosTag::VerbPastTense => "verb past tense",
            PosTag::VerbGerund => "verb present participle",
            PosTag::VerbPastParticiple => "verb past participle",
        }
    }

    /// Check if this tag represents a noun (common or proper, any number)
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PosTag {
    type Err = NamerError;

    fn from_str(value: &str) -> Result<Self> {
        Self::from_code(value).ok_or_else(|| NamerError::unknown_modifier(value))
    }
}

// ============================================================================
// Tagged Word
// ============================================================================

/// A word paired with its inferred part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    /// The surface form as it appeared in the source text
    pub text: String,
    /// The inferred part-of-speech tag
    pub tag: PosTag,
}

impl TaggedWord {
    /// Create a new tagged word
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for suggestion generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamerConfig {
    /// Minimum word length for index admission (characters)
    pub min_word_len: usize,
    /// Attempt budget multiplier: a batch of `n` suggestions may draw at
    /// most `n * retry_factor` candidates before giving up on uniqueness
    pub retry_factor: usize,
    /// Optional RNG seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            min_word_len: 4,
            retry_factor: 2,
            seed: None,
        }
    }
}

impl NamerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_word_len == 0 {
            return Err(NamerError::invalid_config("min_word_len must be > 0"));
        }

        if self.retry_factor == 0 {
            return Err(NamerError::invalid_config("retry_factor must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set minimum word length
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// Builder method: set retry factor
    pub fn with_retry_factor(mut self, retry_factor: usize) -> Self {
        self.retry_factor = retry_factor;
        self
    }

    /// Builder method: set RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
