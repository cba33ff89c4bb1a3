//! Utility modules for docsearch.

pub mod ascii;
