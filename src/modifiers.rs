//! Requested modifier tags
//!
//! A modifier set is the ordered list of part-of-speech tags a caller wants
//! in each suggestion, plus the string that joins the picked words. Order
//! is load-bearing: it fixes the order of segments in every suggestion.

use crate::errors::Result;
use crate::types::PosTag;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "_";

/// The validated, ordered modifier tags for one run.
///
/// Construction validates every tag up front; an unknown tag code rejects
/// the whole set rather than silently dropping the bad entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierSet {
    tags: Vec<PosTag>,
    separator: String,
}

impl ModifierSet {
    /// Build from already-typed tags. An empty list falls back to the
    /// default adjective-noun pair.
    pub fn new(tags: Vec<PosTag>) -> Self {
        let tags = if tags.is_empty() {
            Self::default_tags()
        } else {
            tags
        };
        Self {
            tags,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Parse and validate tag codes, in order. An empty list falls back to
    /// the default adjective-noun pair; any unknown code fails the whole
    /// set.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let mut tags = Vec::with_capacity(codes.len());
        for code in codes {
            tags.push(code.as_ref().parse::<PosTag>()?);
        }
        Ok(Self::new(tags))
    }

    /// The default modifier tags: one adjective, one noun
    pub fn default_tags() -> Vec<PosTag> {
        vec![PosTag::Adjective, PosTag::Noun]
    }

    /// Builder method: set the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The ordered tags
    pub fn tags(&self) -> &[PosTag] {
        &self.tags
    }

    /// The separator string
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of segments each suggestion will have
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Tag codes in order, for provenance output
    pub fn codes(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.code().to_string()).collect()
    }

    /// Join picked words into one suggestion string, in modifier order.
    pub fn join<S: AsRef<str>>(&self, words: &[S]) -> String {
        words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
