//! Suggestion generation
//!
//! The engine draws one random word per modifier tag from the tag index,
//! joins them in modifier order, and enforces batch-level uniqueness under
//! a bounded attempt budget. Uniqueness and guaranteed termination are the
//! two invariants everything else here serves.

use crate::errors::{NamerError, Result};
use crate::index::TagIndex;
use crate::modifiers::ModifierSet;
use crate::types::NamerConfig;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use tracing::warn;

// ============================================================================
// Suggestion Batch
// ============================================================================

/// An ordered batch of unique suggestions.
///
/// A batch may hold fewer suggestions than were requested when the attempt
/// budget ran out before enough unique combinations appeared. That is a
/// reported condition, not an error; callers check [`exhausted`].
///
/// [`exhausted`]: SuggestionBatch::exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBatch {
    suggestions: Vec<String>,
    requested: usize,
    attempts: usize,
}

impl SuggestionBatch {
    /// The suggestions, in production order
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Consume the batch, yielding the suggestion list
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions
    }

    /// How many suggestions were requested
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// How many generation attempts were spent
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Number of suggestions produced
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Check if the batch holds no suggestions
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// True when the batch fell short of the requested count.
    pub fn exhausted(&self) -> bool {
        self.suggestions.len() < self.requested
    }
}

// ============================================================================
// Suggestion Engine
// ============================================================================

/// Generates suggestions from a tag index and modifier set.
///
/// Selection is uniform over the distinct words in each tag pool,
/// independently per tag and per suggestion. The engine owns its RNG;
/// seeding it through [`NamerConfig::seed`] makes whole runs reproducible.
pub struct SuggestionEngine<'a> {
    index: &'a TagIndex,
    modifiers: &'a ModifierSet,
    rng: StdRng,
    retry_factor: usize,
}

impl<'a> SuggestionEngine<'a> {
    /// Create an engine over an index and modifier set.
    pub fn new(index: &'a TagIndex, modifiers: &'a ModifierSet, config: &NamerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            index,
            modifiers,
            rng,
            retry_factor: config.retry_factor,
        }
    }

    /// Generate a single suggestion.
    ///
    /// Fails closed when any requested tag has an empty candidate pool; a
    /// suggestion never goes out with a missing segment.
    pub fn suggest(&mut self) -> Result<String> {
        let mut picks = Vec::with_capacity(self.modifiers.len());
        for &tag in self.modifiers.tags() {
            let pick = self
                .index
                .words(tag)
                .choose(&mut self.rng)
                .ok_or_else(|| NamerError::empty_tag_pool(tag))?;
            picks.push(pick.as_str());
        }
        Ok(self.modifiers.join(&picks))
    }

    /// Generate up to `count` unique suggestions.
    ///
    /// Attempts are bounded by `count * retry_factor`, so this terminates
    /// even when the achievable unique space is smaller than `count`.
    /// Duplicates are discarded and count against the budget. An empty tag
    /// pool fails every attempt identically, so the first such failure ends
    /// the run early instead of burning the rest of the budget.
    pub fn suggestions(&mut self, count: usize) -> SuggestionBatch {
        let budget = count.saturating_mul(self.retry_factor);
        let mut seen = FxHashSet::default();
        let mut suggestions = Vec::with_capacity(count);
        let mut attempts = 0;

        while suggestions.len() < count && attempts < budget {
            attempts += 1;
            match self.suggest() {
                Ok(suggestion) => {
                    if seen.insert(suggestion.clone()) {
                        suggestions.push(suggestion);
                    }
                }
                Err(_) => break,
            }
        }

        let batch = SuggestionBatch {
            suggestions,
            requested: count,
            attempts,
        };
        if batch.exhausted() {
            warn!(
                requested = batch.requested,
                produced = batch.len(),
                attempts = batch.attempts,
                "not enough input variance to satisfy request"
            );
        }
        batch
    }
}
