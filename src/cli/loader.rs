//! Loading a directory of text files into a corpus.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::tokenize;
use crate::config::CorpusConfig;
use crate::error::{DocSearchError, Result};
use crate::index::corpus::Corpus;

/// Regular files directly inside `dir`, sorted by file name.
///
/// Only `.txt` files are listed unless `all` is set.
pub fn list_documents(dir: &Path, all: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DocSearchError::other(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if all || path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Build a corpus from the files of `dir`.
///
/// Files are read and tokenized in parallel, then added in file-name order,
/// so document ids do not depend on scheduling. Invalid UTF-8 is replaced.
pub fn load_corpus(dir: &Path, all: bool, config: CorpusConfig) -> Result<Corpus> {
    let mut corpus = Corpus::with_config(config)?;
    let paths = list_documents(dir, all)?;
    info!("loading {} document(s) from {}", paths.len(), dir.display());

    let tokenizer = corpus.tokenizer();
    let documents = paths
        .par_iter()
        .map(|path| -> Result<(String, Vec<String>)> {
            let bytes = fs::read(path)?;
            let text = String::from_utf8_lossy(&bytes);
            let words = tokenize(tokenizer, &text)?;
            Ok((document_name(path), words))
        })
        .collect::<Result<Vec<_>>>()?;

    for (name, words) in documents {
        debug!("adding {name}");
        corpus.add_document(name, words)?;
    }

    let stats = corpus.stats();
    info!(
        "indexed {} document(s), {} words, {} distinct",
        stats.documents, stats.total_tokens, stats.unique_terms
    );
    Ok(corpus)
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_documents_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("c.md"), "c").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let names: Vec<_> = list_documents(dir.path(), false)
            .unwrap()
            .iter()
            .map(|path| document_name(path))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        let names: Vec<_> = list_documents(dir.path(), true)
            .unwrap()
            .iter()
            .map(|path| document_name(path))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.md"]);
    }

    #[test]
    fn test_load_corpus_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(load_corpus(&missing, false, CorpusConfig::default()).is_err());
    }
}
