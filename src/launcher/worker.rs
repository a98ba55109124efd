use crate::launcher::report::{Event, Reporter};
use std::fmt;
use std::thread;
use std::time::Duration;

/// 1-based identifier handed to exactly one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(usize);

impl WorkerId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Identifier for the worker at zero-based spawn position `index`
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What every worker of a launch does: how many rounds, and how long to sleep after each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPlan {
    pub iterations: u32,
    pub delay: Duration,
}

impl Default for WorkerPlan {
    fn default() -> Self {
        Self {
            iterations: 5,
            delay: Duration::from_secs(1),
        }
    }
}

/// Body of a single worker thread.
///
/// Reports `Running` and sleeps, `plan.iterations` times, then reports `Finished`.
pub fn worker_task(id: WorkerId, plan: &WorkerPlan, reporter: &dyn Reporter) {
    for iteration in 0..plan.iterations {
        tracing::trace!(worker = %id, iteration, "worker iteration");
        reporter.report(Event::Running(id));
        thread::sleep(plan.delay);
    }
    reporter.report(Event::Finished(id));
}
