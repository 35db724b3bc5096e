//! Source acquisition
//!
//! This module turns user-supplied sources into the cleaned text blob the
//! tagger consumes. Two source kinds are supported:
//! - Links: URLs fetched and stripped of markup
//! - Words: literal words used as the corpus directly
//!
//! Fetching and markup stripping sit behind traits so tests (and embedders)
//! can substitute their own transports.

pub mod provider;
pub mod strip;

pub use provider::{HttpSourceProvider, SourceProvider};
pub use strip::{MarkupStripper, TagStripper};

use crate::errors::{NamerError, Result};
use crate::nlp::Normalizer;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Default link source. Each fetch of the randomizer returns a different
/// article, so the default set lists it several times.
pub const DEFAULT_LINK: &str = "https://en.wikipedia.org/wiki/Special:Random";

/// Number of default link fetches when no sources are given.
pub const DEFAULT_LINK_COUNT: usize = 4;

/// How source entries are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Entries are URLs to fetch and strip
    #[default]
    Links,
    /// Entries are literal corpus words
    Words,
}

/// The validated set of sources for one run.
#[derive(Debug, Clone)]
pub struct SourceSet {
    kind: SourceKind,
    entries: Vec<String>,
}

impl SourceSet {
    /// Build a link source set. Duplicate entries are dropped, keeping
    /// first-seen order; an empty list falls back to the default
    /// random-article links, which are fetched once per listing even
    /// though they repeat one URL.
    pub fn links(entries: Vec<String>) -> Self {
        let entries = if entries.is_empty() {
            vec![DEFAULT_LINK.to_string(); DEFAULT_LINK_COUNT]
        } else {
            let mut seen = FxHashSet::default();
            entries
                .into_iter()
                .filter(|entry| seen.insert(entry.clone()))
                .collect()
        };
        Self {
            kind: SourceKind::Links,
            entries,
        }
    }

    /// Build a word-list source set. Word mode has no default corpus, so an
    /// empty list is a configuration error.
    pub fn words(entries: Vec<String>) -> Result<Self> {
        if entries.is_empty() {
            return Err(NamerError::empty_sources(
                "word mode requires at least one word",
            ));
        }
        Ok(Self {
            kind: SourceKind::Words,
            entries,
        })
    }

    /// The source kind
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The source entries, as given (provenance for the result envelope)
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Fetch and normalize all sources into one tagger-ready text blob.
    ///
    /// Link mode fetches each entry in order, strips markup, and cleans the
    /// concatenated text. Word mode bypasses fetching entirely and yields
    /// the distinct lower-cased words. Any fetch failure aborts the whole
    /// gather; there is no partial-source fallback.
    pub fn gather_text(
        &self,
        provider: &dyn SourceProvider,
        stripper: &dyn MarkupStripper,
    ) -> Result<String> {
        let normalizer = Normalizer::new();

        match self.kind {
            SourceKind::Links => {
                let mut pages = Vec::with_capacity(self.entries.len());
                for url in &self.entries {
                    let body = provider.fetch(url)?;
                    let text = stripper.strip(&body);
                    debug!(url = url.as_str(), chars = text.len(), "fetched source");
                    pages.push(text);
                }
                Ok(normalizer.clean_text(&pages.join(" ")))
            }
            SourceKind::Words => {
                let joined = self.entries.join(" ");
                Ok(normalizer.tokens(&joined).join(" "))
            }
        }
    }
}

impl Default for SourceSet {
    fn default() -> Self {
        Self::links(Vec::new())
    }
}
