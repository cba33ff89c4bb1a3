//! Command line interface for docsearch.

pub mod args;
pub mod commands;
pub mod loader;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
