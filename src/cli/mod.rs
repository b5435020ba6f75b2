//! Command-line interface for animal-cards.
//!
//! This module provides the subcommands and the interactive prompts they
//! fall back to when a value isn't given on the command line.

mod commands;
pub mod prompt;

pub use commands::{Cli, Commands, run_command};
