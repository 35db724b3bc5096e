//! Markup stripping
//!
//! Reduces fetched HTML to its visible text. Whole `head`, `script`,
//! `style`, and `code` blocks are dropped because their contents are never
//! prose; remaining tags, comments, and entities become spaces for the
//! normalizer to collapse.

use once_cell::sync::Lazy;
use regex::Regex;

// The regex crate has no backreferences, so each dropped element names its
// own closing tag explicitly.
static BLOCK_ELEMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)<head\b.*?</head\s*>|<script\b.*?</script\s*>|<style\b.*?</style\s*>|<code\b.*?</code\s*>",
    )
    .unwrap()
});

static COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ENTITIES: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[#a-zA-Z0-9]+;").unwrap());

/// Extracts visible text from raw markup.
pub trait MarkupStripper {
    /// Strip markup from `html`, returning visible text.
    fn strip(&self, html: &str) -> String;
}

/// Regex-based markup stripper.
///
/// Not a real HTML parser: it aims for "good enough to harvest words", not
/// fidelity. Malformed markup degrades to extra dropped text, never to a
/// panic.
#[derive(Debug, Clone, Default)]
pub struct TagStripper;

impl TagStripper {
    /// Create a new tag stripper
    pub fn new() -> Self {
        Self
    }
}

impl MarkupStripper for TagStripper {
    fn strip(&self, html: &str) -> String {
        let text = COMMENTS.replace_all(html, " ");
        let text = BLOCK_ELEMENTS.replace_all(&text, " ");
        let text = TAGS.replace_all(&text, " ");
        let text = ENTITIES.replace_all(&text, " ");
        text.into_owned()
    }
}
