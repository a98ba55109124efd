use crate::launcher::worker::WorkerPlan;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do with already-running workers when a later spawn fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpawnFailurePolicy {
    /// Wait for every started worker to finish, then report the error
    #[default]
    Join,
    /// Report the error right away and leave started workers untracked
    Detach,
}

/// Settings for one launch, fixed before the first worker starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchSettings {
    /// Number of concurrent workers
    pub worker_count: usize,
    /// Rounds each worker runs
    pub iterations: u32,
    /// Sleep after each round, in milliseconds
    pub delay_ms: u64,
    /// Thread names are `<prefix>-<id>`
    pub thread_name_prefix: String,
    pub on_spawn_failure: SpawnFailurePolicy,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            worker_count: 3,
            iterations: 5,
            delay_ms: 1000,
            thread_name_prefix: "worker".to_string(),
            on_spawn_failure: SpawnFailurePolicy::Join,
        }
    }
}

impl LaunchSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn worker_plan(&self) -> WorkerPlan {
        WorkerPlan {
            iterations: self.iterations,
            delay: self.delay(),
        }
    }
}
