//! Command implementations for the docsearch CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::loader::load_corpus;
use crate::cli::output::*;
use crate::config::CorpusConfig;
use crate::error::Result;
use crate::query::{Hit, ResultCursor};

/// Execute a CLI command.
pub fn execute_command(args: DocSearchArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("using configuration {}", path.display());
            CorpusConfig::from_file(path)?
        }
        None => CorpusConfig::default(),
    };

    match &args.command {
        Command::Search(search_args) => search(search_args, config, &args),
        Command::Complete(complete_args) => complete(complete_args, config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, config, &args),
    }
}

/// Search a directory for a word or phrase.
fn search(args: &SearchArgs, config: CorpusConfig, cli_args: &DocSearchArgs) -> Result<()> {
    let corpus = load_corpus(&args.source.dir, args.source.all, config)?;

    let start = Instant::now();
    let documents = match corpus.find(&args.query)? {
        Some(cursor) => collect_hits(cursor, args.context),
        None => Vec::new(),
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    let total_hits = documents.iter().map(|document| document.hits.len()).sum();
    output_result(
        "Search completed",
        &SearchResults {
            query: args.query.clone(),
            documents,
            total_hits,
            duration_ms,
        },
        cli_args,
    )
}

/// Drain a cursor one document at a time: content, then length, then hits.
pub fn collect_hits(mut cursor: ResultCursor<'_>, context: usize) -> Vec<DocumentHits> {
    let mut documents = Vec::with_capacity(cursor.len());

    while let Some(tokens) = cursor.get_content() {
        let Some(size) = cursor.get_content_length() else {
            break;
        };
        let name = cursor.current_document().unwrap_or_default().to_string();

        let mut hits = Vec::new();
        while let Some(hit) = cursor.next_hit() {
            hits.push(HitContext {
                location: hit.location,
                len: hit.len,
                snippet: snippet(tokens, hit, context),
            });
        }

        documents.push(DocumentHits { name, size, hits });
    }

    documents
}

/// The words of `hit` plus up to `context` words on each side.
fn snippet(tokens: &[String], hit: Hit, context: usize) -> String {
    let start = hit.location.saturating_sub(context);
    let end = hit
        .location
        .saturating_add(hit.span())
        .saturating_add(context)
        .min(tokens.len());
    tokens.get(start..end).unwrap_or_default().join(" ")
}

/// Suggest a completion for a prefix.
fn complete(args: &CompleteArgs, config: CorpusConfig, cli_args: &DocSearchArgs) -> Result<()> {
    let corpus = load_corpus(&args.source.dir, args.source.all, config)?;

    output_result(
        "Completion",
        &CompletionResult {
            prefix: args.prefix.clone(),
            completion: corpus.autocomplete(&args.prefix).map(str::to_string),
        },
        cli_args,
    )
}

/// Show statistics for a directory.
fn show_stats(args: &StatsArgs, config: CorpusConfig, cli_args: &DocSearchArgs) -> Result<()> {
    let corpus = load_corpus(&args.source.dir, args.source.all, config)?;

    output_result(
        "Corpus statistics",
        &StatsResult {
            directory: args.source.dir.display().to_string(),
            stats: corpus.stats(),
        },
        cli_args,
    )
}
