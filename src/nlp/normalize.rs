//! Source text normalization
//!
//! This module cleans raw source text into the two shapes the rest of the
//! pipeline consumes: a whitespace-collapsed text blob for the tagger, and
//! a flat stream of distinct normalized tokens.

use rustc_hash::FxHashSet;

/// Characters allowed inside a normalized token.
fn is_token_char(c: char) -> bool {
    c.is_alphabetic() || c == '-'
}

/// Normalizes raw source text into tagger-ready blobs and token streams.
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text blob for tagging.
    ///
    /// Every character outside the token class (letters and hyphens) is
    /// replaced with a space, then whitespace runs are collapsed. Case is
    /// preserved so the tagger can still recognize proper nouns; tokens are
    /// lower-cased later, at index admission.
    pub fn clean_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pending_space = false;

        for c in text.chars() {
            if is_token_char(c) {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            } else {
                pending_space = true;
            }
        }

        out
    }

    /// Normalize a single word into a token, or reject it.
    ///
    /// Lower-cases, trims edge hyphens, and returns `None` if anything
    /// outside the token class remains or the result is empty. This is the
    /// single definition of the token invariant; index admission reuses it.
    pub fn normalize_word(&self, word: &str) -> Option<String> {
        let trimmed = word.trim_matches('-');
        if trimmed.is_empty() || !trimmed.chars().all(is_token_char) {
            return None;
        }
        let lower = trimmed.to_lowercase();
        // Lowercasing can expand characters into sequences with combining
        // marks, which fall outside the token class
        if !lower.chars().all(is_token_char) {
            return None;
        }
        Some(lower)
    }

    /// Produce the flat distinct token stream for a text.
    ///
    /// Cleans the text, splits on whitespace, normalizes each piece, and
    /// drops duplicates while preserving first-seen order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean_text(text);
        let mut seen = FxHashSet::default();
        let mut tokens = Vec::new();

        for piece in cleaned.split_whitespace() {
            if let Some(token) = self.normalize_word(piece) {
                if seen.insert(token.clone()) {
                    tokens.push(token);
                }
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_digits_and_punctuation() {
        let normalizer = Normalizer::new();
        let cleaned = normalizer.clean_text("v1.2 release: fast/safe, 100% done!");

        assert!(!cleaned.chars().any(|c| c.is_ascii_digit()));
        assert!(!cleaned.contains('/'));
        assert!(!cleaned.contains(':'));
        assert_eq!(cleaned, "v release fast safe done");
    }

    #[test]
    fn test_clean_text_preserves_case_and_hyphens() {
        let normalizer = Normalizer::new();
        let cleaned = normalizer.clean_text("Paris has well-known cafes.");

        assert_eq!(cleaned, "Paris has well-known cafes");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.clean_text("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalizer.clean_text(""), "");
        assert_eq!(normalizer.clean_text("42 7/8"), "");
    }

    #[test]
    fn test_normalize_word() {
        let normalizer = Normalizer::new();

        assert_eq!(normalizer.normalize_word("Dog"), Some("dog".to_string()));
        assert_eq!(
            normalizer.normalize_word("-well-known-"),
            Some("well-known".to_string())
        );
        assert_eq!(normalizer.normalize_word(""), None);
        assert_eq!(normalizer.normalize_word("---"), None);
        assert_eq!(normalizer.normalize_word("abc123"), None);
    }

    #[test]
    fn test_tokens_distinct_lowercase() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.tokens("Dog dog DOG cat; dog!");

        assert_eq!(tokens, vec!["dog", "cat"]);
    }

    #[test]
    fn test_tokens_idempotent() {
        let normalizer = Normalizer::new();
        let first = normalizer.tokens("The QUICK brown-fox, v2.0 jumps/climbs!");
        let second = normalizer.tokens(&first.join(" "));

        assert_eq!(first, second);
    }
}
