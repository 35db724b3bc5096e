//! # codenamer
//!
//! A release-name suggestion generator.
//!
//! Harvests words from text sources (web pages, or literal word lists),
//! annotates each word with a part-of-speech tag, and joins one randomly
//! chosen word per requested tag into short suggestions such as
//! `angry_dog`.
//!
//! ## Features
//!
//! - **Pluggable edges**: fetching, markup stripping, tagging, and
//!   dictionary filtering all sit behind traits
//! - **Unique batches**: no duplicate suggestions within a run, under a
//!   bounded attempt budget so generation always terminates
//! - **Reproducible**: an optional RNG seed makes whole runs repeatable
//! - **Multiple encodings**: text, CSV, JSON, and YAML output

pub mod cli;
pub mod engine;
pub mod errors;
pub mod index;
pub mod modifiers;
pub mod nlp;
pub mod source;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use errors::{NamerError, Result};
pub use types::{NamerConfig, PosTag, TaggedWord};

// Re-export main functionality
pub use engine::{SuggestionBatch, SuggestionEngine};
pub use index::{TagIndex, TagIndexBuilder};
pub use modifiers::ModifierSet;
pub use nlp::{FileLexicon, HeuristicTagger, Lexicon, MemoryLexicon, Normalizer, Tagger};
pub use source::{
    HttpSourceProvider, MarkupStripper, SourceKind, SourceProvider, SourceSet, TagStripper,
};
pub use writer::{EnvelopeConfig, OutputFormat, ResultEnvelope, ResultWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
