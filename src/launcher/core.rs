use crate::launcher::error::LaunchError;
use crate::launcher::report::{Event, Reporter};
use crate::launcher::settings::{LaunchSettings, SpawnFailurePolicy};
use crate::launcher::spawn::{OsThreads, Spawner, WorkerHandle};
use crate::launcher::worker::{WorkerId, worker_task};
use std::sync::Arc;
use std::time::Instant;

/// Upper bound on handle slots reserved up front; more grow as spawns succeed
const RESERVED_HANDLES: usize = 1024;

/// Starts the configured workers and waits for all of them
pub struct Launcher<S = OsThreads> {
    settings: LaunchSettings,
    spawner: S,
    reporter: Arc<dyn Reporter>,
}

impl Launcher<OsThreads> {
    pub fn new(settings: LaunchSettings, reporter: Arc<dyn Reporter>) -> Self {
        let spawner = OsThreads::new(settings.thread_name_prefix.clone());
        Self::with_spawner(settings, spawner, reporter)
    }
}

impl<S: Spawner> Launcher<S> {
    pub fn with_spawner(settings: LaunchSettings, spawner: S, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            settings,
            spawner,
            reporter,
        }
    }

    pub fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    /// Launch `settings.worker_count` workers
    pub fn run(&self) -> Result<(), LaunchError> {
        self.launch(self.settings.worker_count)
    }

    /// Spawn `count` workers with ids `1..=count` and join them all.
    ///
    /// Stops at the first spawn failure without trying the remaining workers.
    /// Workers that already started are handled per `on_spawn_failure`; they are
    /// never interrupted.
    pub fn launch(&self, count: usize) -> Result<(), LaunchError> {
        let started_at = Instant::now();
        let plan = self.settings.worker_plan();
        tracing::debug!(
            workers = count,
            iterations = plan.iterations,
            delay_ms = self.settings.delay_ms,
            "launching workers"
        );

        self.reporter.report(Event::Creating);

        let mut handles: Vec<WorkerHandle> = Vec::with_capacity(count.min(RESERVED_HANDLES));
        for index in 0..count {
            let id = WorkerId::from_index(index);
            let reporter = Arc::clone(&self.reporter);

            match self
                .spawner
                .spawn(id, Box::new(move || worker_task(id, &plan, reporter.as_ref())))
            {
                Ok(handle) => {
                    tracing::trace!(worker = %id, "spawned worker");
                    handles.push(handle);
                }
                Err(source) => {
                    tracing::warn!(worker = %id, error = %source, "failed to spawn worker");
                    self.abandon(handles);
                    return Err(LaunchError::Spawn { id, source });
                }
            }
        }

        self.reporter.report(Event::Waiting);
        join_all(handles)?;
        self.reporter.report(Event::AllFinished);

        tracing::info!(
            workers = count,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            "all workers joined"
        );
        Ok(())
    }

    /// Deal with the workers that started before a spawn failure
    fn abandon(&self, handles: Vec<WorkerHandle>) {
        match self.settings.on_spawn_failure {
            SpawnFailurePolicy::Join => {
                tracing::debug!(workers = handles.len(), "joining workers started before the failure");
                // The spawn failure is what gets reported
                if let Err(e) = join_all(handles) {
                    tracing::warn!(error = %e, "started worker failed while aborting launch");
                }
            }
            SpawnFailurePolicy::Detach => {
                tracing::debug!(workers = handles.len(), "detaching workers started before the failure");
                drop(handles);
            }
        }
    }
}

/// Join every handle in order.
///
/// Keeps joining after a panicked worker so no thread is left behind, and
/// returns the first failure once all are done.
pub fn join_all(handles: Vec<WorkerHandle>) -> Result<(), LaunchError> {
    let mut first_failure = None;

    for handle in handles {
        let id = handle.id();
        match handle.join() {
            Ok(()) => tracing::trace!(worker = %id, "joined worker"),
            Err(e) => {
                tracing::warn!(worker = %id, "worker panicked");
                first_failure.get_or_insert(e);
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
