//! Library entry for bccframe-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;
