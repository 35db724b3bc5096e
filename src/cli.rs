//! Command-line interface
//!
//! Thin glue between argument parsing and the library pipeline. With no
//! subcommand the tool generates suggestions; the `formats` and `modifiers`
//! subcommands print the supported option listings and exit.

use crate::engine::SuggestionEngine;
use crate::errors::Result;
use crate::index::TagIndexBuilder;
use crate::modifiers::{ModifierSet, DEFAULT_SEPARATOR};
use crate::nlp::{FileLexicon, HeuristicTagger};
use crate::source::{HttpSourceProvider, SourceSet, TagStripper};
use crate::types::{NamerConfig, PosTag};
use crate::writer::{OutputFormat, ResultEnvelope, ResultWriter};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Codenamer CLI application
#[derive(Parser)]
#[command(name = "codenamer")]
#[command(about = "Generate release name suggestions from harvested text", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    suggest: SuggestArgs,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List available output formats
    Formats,
    /// List available modifier tags
    Modifiers,
}

/// Options for the default suggestion run
#[derive(Args)]
struct SuggestArgs {
    /// Source URLs to harvest, or literal words with --words.
    /// Defaults to a handful of random Wikipedia articles.
    sources: Vec<String>,

    /// Number of result entries to generate
    #[arg(short, long, default_value_t = 1)]
    results: usize,

    /// Format of returned results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Modifiers for result generation as Penn Treebank tags
    #[arg(short, long, value_delimiter = ',', value_name = "TAG")]
    modifiers: Vec<String>,

    /// Value placed between modifier words
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Treat sources as literal corpus words instead of URLs
    #[arg(short, long)]
    words: bool,

    /// Word-list file used to drop scraped non-words
    #[arg(short, long, value_name = "FILE", env = "CODENAMER_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Minimum admitted word length, in characters
    #[arg(long, default_value_t = 4, value_name = "LEN")]
    min_word_len: usize,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Run using the current process arguments.
pub fn run() -> Result<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing; suggestions own stdout, so logs go to stderr
    let filter = if cli.suggest.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    match cli.command {
        Some(Commands::Formats) => {
            print_formats();
            Ok(())
        }
        Some(Commands::Modifiers) => {
            print_modifiers();
            Ok(())
        }
        None => run_suggest(cli.suggest),
    }
}

fn run_suggest(args: SuggestArgs) -> Result<()> {
    let mut config = NamerConfig::default().with_min_word_len(args.min_word_len);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let modifiers = ModifierSet::from_codes(&args.modifiers)?.with_separator(&args.separator);

    let sources = if args.words {
        SourceSet::words(args.sources)?
    } else {
        SourceSet::links(args.sources)
    };

    let provider = HttpSourceProvider::new();
    let stripper = TagStripper::new();
    let text = sources.gather_text(&provider, &stripper)?;

    let lexicon = match &args.lexicon {
        Some(path) => Some(FileLexicon::load(path)?),
        None => None,
    };
    let tagger = HeuristicTagger::new();
    let mut builder = TagIndexBuilder::new(&tagger).with_min_word_len(config.min_word_len);
    if let Some(lexicon) = &lexicon {
        builder = builder.with_lexicon(lexicon);
    }
    let index = builder.build(&text);

    let mut engine = SuggestionEngine::new(&index, &modifiers, &config);
    let batch = engine.suggestions(args.results);

    let envelope = ResultEnvelope::new(
        sources.entries().to_vec(),
        modifiers.codes(),
        batch.into_suggestions(),
    );
    let output = ResultWriter::new(args.format).write(&envelope)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn print_formats() {
    println!("TYPE  DESCRIPTION");
    println!("----  -----------");
    for format in OutputFormat::ALL {
        println!("{:>4}  {}", format.name(), format.description());
    }
}

fn print_modifiers() {
    println!("TYPE  DESCRIPTION");
    println!("----  -----------");
    for tag in PosTag::ALL {
        println!("{:>4}  {}", tag.code(), tag.description());
    }
}
