//! Configuration management for threadrun
//!
//! Launch settings are layered with figment, lowest priority first:
//!
//! 1. Embedded `default-config.toml`
//! 2. User config `~/.config/threadrun/config.{toml,json,yaml,yml}`
//! 3. Repository config `threadrun.{toml,json,yaml,yml}` in the working directory
//! 4. `--config <FILE>`, which replaces 2 and 3 when given
//! 5. `THREADRUN_` environment variables, `__` separating sections
//!    (`THREADRUN_LAUNCHER__WORKER_COUNT=8`)
//! 6. Command-line flags
//!
//! Everything is resolved once at startup; a running launch never sees changes.

pub mod core;
pub mod formats;

// Re-export main types for easier access
pub use self::core::{LauncherOverrides, ThreadrunConfig};
pub use formats::ConfigFormat;
