//! Command-line interface for threadrun
//!
//! Argument parsing uses clap derive. With no subcommand the program runs a
//! launch with the configured settings.

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::Output;
