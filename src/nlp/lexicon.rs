//! Dictionary-validity checks
//!
//! The index builder can optionally consult a lexicon to drop scraped
//! fragments that are not real words. The file-backed implementation loads
//! plain word lists and hunspell-style `.dic` files.

use crate::errors::{NamerError, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Reports whether a word is a valid dictionary entry.
pub trait Lexicon {
    /// Check membership, case-insensitively.
    fn contains(&self, word: &str) -> bool;
}

/// A lexicon loaded from a word-list file.
///
/// Accepts one word per line. Hunspell `.dic` conventions are tolerated:
/// a leading entry-count line is skipped and affix flags after `/` are
/// ignored. Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct FileLexicon {
    words: FxHashSet<String>,
}

impl FileLexicon {
    /// Load a lexicon from a file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| NamerError::lexicon(format!("{}: {}", path.display(), err)))?;
        Ok(Self::parse(&content))
    }

    /// Parse word-list content.
    pub fn parse(content: &str) -> Self {
        let mut words = FxHashSet::default();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Hunspell .dic files open with the entry count
            if idx == 0 && line.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let word = line.split('/').next().unwrap_or(line).trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }

        Self { words }
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for FileLexicon {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// An in-memory lexicon built from a fixed word list.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    words: FxHashSet<String>,
}

impl MemoryLexicon {
    /// Build from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Lexicon for MemoryLexicon {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
