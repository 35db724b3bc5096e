//! Tag index construction
//!
//! The tag index is the mapping from part-of-speech tag to the distinct
//! candidate words observed with that tag. It is built once per run from
//! the tagger's output and queried read-only by the suggestion engine;
//! the tagger is never re-run per suggestion.

use crate::nlp::{Lexicon, Normalizer, Tagger};
use crate::types::PosTag;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Mapping from tag to distinct candidate words.
///
/// Within a tag, words are unique and kept in first-seen order, so two
/// builds over the same tagged sequence produce identical indexes.
/// Repeated occurrences of a word carry no extra selection weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    words: FxHashMap<PosTag, Vec<String>>,
    seen: FxHashMap<PosTag, FxHashSet<String>>,
}

impl TagIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word under a tag. Returns `true` if the word was new for
    /// that tag.
    pub fn insert(&mut self, tag: PosTag, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.seen.entry(tag).or_default().insert(word.clone()) {
            self.words.entry(tag).or_default().push(word);
            true
        } else {
            false
        }
    }

    /// The candidate words for a tag, empty when the tag never occurred.
    pub fn words(&self, tag: PosTag) -> &[String] {
        self.words.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of tags that have at least one candidate word
    pub fn tag_count(&self) -> usize {
        self.words.len()
    }

    /// Total number of distinct (tag, word) entries
    pub fn word_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Check if the index holds no words at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Builds a [`TagIndex`] from source text.
///
/// The tagger and optional lexicon are injected once at construction; the
/// builder owns the admission rules between tagger output and the index.
pub struct TagIndexBuilder<'a> {
    tagger: &'a dyn Tagger,
    lexicon: Option<&'a dyn Lexicon>,
    min_word_len: usize,
    normalizer: Normalizer,
}

impl<'a> TagIndexBuilder<'a> {
    /// Create a builder around a tagger, with the default word-length floor
    pub fn new(tagger: &'a dyn Tagger) -> Self {
        Self {
            tagger,
            lexicon: None,
            min_word_len: 4,
            normalizer: Normalizer::new(),
        }
    }

    /// Require words to be valid entries in `lexicon`. Lexicon filtering
    /// also restricts words to purely alphabetic characters, since
    /// dictionaries do not list hyphenated scrape artifacts.
    pub fn with_lexicon(mut self, lexicon: &'a dyn Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Set the minimum admitted word length, in characters
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// Tag `text` and partition the output into a tag index.
    pub fn build(&self, text: &str) -> TagIndex {
        let mut index = TagIndex::new();

        for tagged in self.tagger.tag(text) {
            let Some(word) = self.normalizer.normalize_word(&tagged.text) else {
                continue;
            };
            if !self.admit(&word) {
                continue;
            }
            index.insert(tagged.tag, word);
        }

        debug!(
            words = index.word_count(),
            tags = index.tag_count(),
            "built tag index"
        );
        index
    }

    /// Admission rules for a normalized word.
    fn admit(&self, word: &str) -> bool {
        if word.chars().count() < self.min_word_len {
            return false;
        }
        if let Some(lexicon) = self.lexicon {
            if !word.chars().all(|c| c.is_alphabetic()) {
                return false;
            }
            if !lexicon.contains(word) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicTagger, MemoryLexicon};

    #[test]
    fn test_insert_dedups_per_tag() {
        let mut index = TagIndex::new();

        assert!(index.insert(PosTag::Adjective, "angry"));
        assert!(!index.insert(PosTag::Adjective, "angry"));
        assert!(index.insert(PosTag::Noun, "angry"));

        assert_eq!(index.words(PosTag::Adjective), ["angry"]);
        assert_eq!(index.words(PosTag::Noun), ["angry"]);
        assert_eq!(index.word_count(), 2);
        assert_eq!(index.tag_count(), 2);
    }

    #[test]
    fn test_missing_tag_is_empty_slice() {
        let index = TagIndex::new();
        assert!(index.words(PosTag::Verb).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_groups_by_tag() {
        let tagger = HeuristicTagger::new();
        let index = TagIndexBuilder::new(&tagger)
            .with_min_word_len(3)
            .build("the angry small dog barked");

        assert_eq!(index.words(PosTag::Adjective), ["angry"]);
        assert_eq!(index.words(PosTag::Noun), ["small", "dog"]);
        assert_eq!(index.words(PosTag::VerbPastTense), ["barked"]);
        // No stopword list: function words index too once they pass the
        // length floor
        assert_eq!(index.words(PosTag::Determiner), ["the"]);
    }

    #[test]
    fn test_build_lowercases_words() {
        let tagger = HeuristicTagger::new();
        let index = TagIndexBuilder::new(&tagger)
            .with_min_word_len(4)
            .build("Berlin");

        assert_eq!(index.words(PosTag::ProperNoun), ["berlin"]);
    }

    #[test]
    fn test_min_word_len_filters() {
        let tagger = HeuristicTagger::new();
        let index = TagIndexBuilder::new(&tagger).build("angry dog");

        // Default floor is 4 characters: "dog" is dropped
        assert_eq!(index.words(PosTag::Adjective), ["angry"]);
        assert!(index.words(PosTag::Noun).is_empty());
    }

    #[test]
    fn test_build_dedups_repeats() {
        let tagger = HeuristicTagger::new();
        let index = TagIndexBuilder::new(&tagger).build("angry angry angry wolf wolf");

        assert_eq!(index.words(PosTag::Adjective), ["angry"]);
        assert_eq!(index.words(PosTag::Noun), ["wolf"]);
    }

    #[test]
    fn test_lexicon_filters_nonwords() {
        let tagger = HeuristicTagger::new();
        let lexicon = MemoryLexicon::from_words(["angry", "wolf"]);
        let index = TagIndexBuilder::new(&tagger)
            .with_lexicon(&lexicon)
            .build("angry gnarly wolf blorp");

        assert_eq!(index.words(PosTag::Adjective), ["angry"]);
        assert_eq!(index.words(PosTag::Noun), ["wolf"]);
    }

    #[test]
    fn test_lexicon_drops_hyphenated() {
        let tagger = HeuristicTagger::new();
        let lexicon = MemoryLexicon::from_words(["well-known", "wolf"]);
        let with_lexicon = TagIndexBuilder::new(&tagger)
            .with_lexicon(&lexicon)
            .build("well-known wolf");
        let without_lexicon = TagIndexBuilder::new(&tagger).build("well-known wolf");

        // Hyphens survive plain admission but not lexicon admission
        assert!(with_lexicon
            .words(PosTag::Noun)
            .iter()
            .all(|w| !w.contains('-')));
        assert!(without_lexicon
            .words(PosTag::Noun)
            .iter()
            .any(|w| w == "well-known"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let tagger = HeuristicTagger::new();
        let text = "angry wolves guarded frozen gates while hungry foxes waited";
        let builder = TagIndexBuilder::new(&tagger);

        assert_eq!(builder.build(text), builder.build(text));
    }
}
