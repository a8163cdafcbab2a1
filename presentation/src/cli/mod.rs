//! CLI definitions for kb-console.

pub mod commands;

pub use commands::{Cli, OutputFormat};
