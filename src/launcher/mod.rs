//! Worker launcher
//!
//! Spawns a fixed number of independent worker threads, lets each run a bounded
//! print/sleep loop, and joins all of them before returning.
//!
//! # Lifecycle
//!
//! ```text
//! launch(count)
//!   │  Creating threads
//!   ├─ spawn worker 1 ──▶ Running × iterations ──▶ Finished
//!   ├─ spawn worker 2 ──▶ Running × iterations ──▶ Finished
//!   ├─ ...
//!   │  main(): threads created, waiting for finish...
//!   ├─ join 1, join 2, ... (in handle order)
//!   │  All threads finished
//!   ▼
//! Ok(())
//! ```
//!
//! Output from different workers interleaves arbitrarily. The only ordering
//! guarantee is that `All threads finished` comes after every worker's
//! `Finished` line.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use threadrun::launcher::{CaptureReporter, Event, LaunchSettings, Launcher};
//!
//! let settings = LaunchSettings {
//!     delay_ms: 0,
//!     ..LaunchSettings::default()
//! };
//! let capture = Arc::new(CaptureReporter::new());
//! let launcher = Launcher::new(settings, capture.clone());
//!
//! launcher.launch(2)?;
//!
//! let events = capture.events();
//! assert_eq!(events.first(), Some(&Event::Creating));
//! assert_eq!(events.last(), Some(&Event::AllFinished));
//! # Ok::<(), threadrun::launcher::LaunchError>(())
//! ```

pub mod core;
pub mod error;
pub mod report;
pub mod settings;
pub mod spawn;
pub mod worker;

// Re-export main types for easier access
pub use self::core::{Launcher, join_all};
pub use error::LaunchError;
pub use report::{CaptureReporter, Event, Reporter, StdoutReporter};
pub use settings::{LaunchSettings, SpawnFailurePolicy};
pub use spawn::{OsThreads, Spawner, WorkerFn, WorkerHandle};
pub use worker::{WorkerId, WorkerPlan, worker_task};
