//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{DocSearchArgs, OutputFormat};
use crate::error::Result;
use crate::index::corpus::CorpusStats;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub documents: Vec<DocumentHits>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Hits found in one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentHits {
    pub name: String,
    pub size: usize,
    pub hits: Vec<HitContext>,
}

/// One hit with the words around it.
#[derive(Debug, Serialize, Deserialize)]
pub struct HitContext {
    pub location: usize,
    pub len: usize,
    pub snippet: String,
}

/// Result structure for autocomplete.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResult {
    pub prefix: String,
    pub completion: Option<String>,
}

/// Corpus statistics for a directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub directory: String,
    #[serde(flatten)]
    pub stats: CorpusStats,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

impl HumanOutput for SearchResults {
    fn to_human(&self) -> String {
        let mut out = String::new();
        if self.documents.is_empty() {
            let _ = writeln!(out, "No matches for \"{}\"", self.query);
            return out;
        }

        let _ = writeln!(out, "Search Results:");
        let _ = writeln!(out, "═══════════════");
        for document in &self.documents {
            let _ = writeln!(out);
            let _ = writeln!(out, "{} ({} words)", document.name, document.size);
            let _ = writeln!(out, "─────────────");
            for hit in &document.hits {
                let _ = writeln!(out, "  @{:<6} {}", hit.location, hit.snippet);
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Total hits: {} in {} document(s)",
            self.total_hits,
            self.documents.len()
        );
        let _ = writeln!(out, "Search time: {}ms", self.duration_ms);
        out
    }
}

impl HumanOutput for CompletionResult {
    fn to_human(&self) -> String {
        match &self.completion {
            Some(word) => format!("{} -> {word}\n", self.prefix),
            None => format!("No completion for \"{}\"\n", self.prefix),
        }
    }
}

impl HumanOutput for StatsResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Corpus Statistics:");
        let _ = writeln!(out, "══════════════════");
        let _ = writeln!(out, "Directory: {}", self.directory);
        let _ = writeln!(out, "Documents: {}", self.stats.documents);
        let _ = writeln!(out, "Total words: {}", self.stats.total_tokens);
        let _ = writeln!(out, "Distinct words: {}", self.stats.unique_terms);
        let _ = writeln!(out, "Completion words: {}", self.stats.trie_words);
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &DocSearchArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &DocSearchArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DocSearchArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
