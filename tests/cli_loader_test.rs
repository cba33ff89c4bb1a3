//! Loading documents from a directory and driving the CLI helpers.

use std::fs;

use tempfile::TempDir;

use docsearch::analysis::TokenizerKind;
use docsearch::cli::commands::collect_hits;
use docsearch::cli::loader::{list_documents, load_corpus};
use docsearch::config::CorpusConfig;
use docsearch::error::Result;

fn fixture() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("02-dog.txt"), "The dog sat.")?;
    fs::write(dir.path().join("01-cat.txt"), "The cat sat.")?;
    fs::write(dir.path().join("notes.md"), "The cat napped.")?;
    fs::write(dir.path().join("binary.txt"), [0x66, 0x6f, 0xff, 0x20, 0x63, 0x61, 0x74])?;
    Ok(dir)
}

#[test]
fn test_load_corpus_in_file_name_order() -> Result<()> {
    let dir = fixture()?;
    let corpus = load_corpus(dir.path(), false, CorpusConfig::default())?;

    let names: Vec<_> = corpus.documents().iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["01-cat.txt", "02-dog.txt", "binary.txt"]);
    assert_eq!(corpus.document(0).map(|d| d.tokens().len()), Some(3));

    let cursor = corpus.find("the cat")?.expect("phrase in the first file");
    let documents = collect_hits(cursor, 1);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "01-cat.txt");
    assert_eq!(documents[0].hits[0].snippet, "The cat sat");

    Ok(())
}

#[test]
fn test_load_all_files() -> Result<()> {
    let dir = fixture()?;
    assert_eq!(list_documents(dir.path(), true)?.len(), 4);

    let corpus = load_corpus(dir.path(), true, CorpusConfig::default())?;
    let cursor = corpus.find("cat")?.expect("cat occurs");
    let names: Vec<_> = cursor.documents().collect();
    assert_eq!(names, vec!["01-cat.txt", "binary.txt", "notes.md"]);

    Ok(())
}

#[test]
fn test_load_with_whitespace_tokenizer() -> Result<()> {
    let dir = fixture()?;
    let config = CorpusConfig::builder()
        .tokenizer(TokenizerKind::Whitespace)
        .build()?;
    let corpus = load_corpus(dir.path(), false, config)?;

    assert!(corpus.find("sat")?.is_none());
    assert!(corpus.find("sat.")?.is_some());

    Ok(())
}
