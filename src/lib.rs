//! # threadrun - spawn, run, join
//!
//! threadrun starts a fixed number of worker threads, lets each one print a
//! counted status line a fixed number of times with a delay in between, and
//! joins all of them before exiting.
//!
//! ## Quick Start
//!
//! ```bash
//! # Three workers, five rounds each, one second apart
//! threadrun
//!
//! # Eight workers, fast
//! threadrun run --workers 8 --delay-ms 100
//!
//! # Inspect the resolved settings
//! threadrun config show
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use threadrun::config::ThreadrunConfig;
//! use threadrun::launcher::{Launcher, StdoutReporter};
//!
//! let settings = ThreadrunConfig::load(None, None)?.launcher()?;
//! Launcher::new(settings, Arc::new(StdoutReporter)).run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod launcher;

pub use cli::{Cli, Output};
pub use config::ThreadrunConfig;

/// Result type alias for threadrun operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
