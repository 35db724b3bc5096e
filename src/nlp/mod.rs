//! Text normalization and tagging
//!
//! This module provides the language-processing stages of the pipeline:
//! - Normalizer: cleans raw source text into a tagger-ready blob or a
//!   distinct token stream
//! - Tagger: annotates words with part-of-speech tags (trait plus a
//!   self-contained heuristic implementation)
//! - Lexicon: dictionary-validity oracle used to filter non-words

pub mod lexicon;
pub mod normalize;
pub mod tagger;

pub use lexicon::{FileLexicon, Lexicon, MemoryLexicon};
pub use normalize::Normalizer;
pub use tagger::{HeuristicTagger, Tagger};
