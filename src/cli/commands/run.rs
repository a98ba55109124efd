//! Launch the workers

use crate::cli::Output;
use crate::config::{LauncherOverrides, ThreadrunConfig};
use crate::launcher::{Launcher, SpawnFailurePolicy, Spawner, StdoutReporter};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

/// Exit status when a launch could not complete
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Rounds each worker runs before finishing
    #[arg(short, long, value_name = "N")]
    pub iterations: Option<u32>,

    /// Sleep after each round, in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Worker threads are named <PREFIX>-<id>
    #[arg(long, value_name = "PREFIX")]
    pub thread_name_prefix: Option<String>,

    /// What to do with started workers when a later spawn fails
    #[arg(long, value_enum)]
    pub on_spawn_failure: Option<SpawnFailurePolicy>,
}

impl From<RunArgs> for LauncherOverrides {
    fn from(args: RunArgs) -> Self {
        LauncherOverrides {
            worker_count: args.workers,
            iterations: args.iterations,
            delay_ms: args.delay_ms,
            thread_name_prefix: args.thread_name_prefix,
            on_spawn_failure: args.on_spawn_failure,
        }
    }
}

pub fn execute(args: RunArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = ThreadrunConfig::load(custom_config, Some(args.into()))?;
    let settings = config.launcher()?;
    if settings.worker_count == 0 {
        output.warning("worker_count is 0, no threads will be started");
    }

    let launcher = Launcher::new(settings, Arc::new(StdoutReporter));
    if let Err(code) = launch(&launcher, output) {
        std::process::exit(code);
    }

    Ok(())
}

/// Run the launch, printing the diagnostic and yielding the exit status on failure
fn launch<S: Spawner>(launcher: &Launcher<S>, output: &Output) -> Result<(), i32> {
    launcher.run().map_err(|e| {
        output.error(&e.to_string());
        LAUNCH_FAILURE_EXIT_CODE
    })
}
