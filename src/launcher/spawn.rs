use crate::launcher::error::LaunchError;
use crate::launcher::worker::WorkerId;
use std::io;
use std::thread::{self, JoinHandle};

/// Work a spawner runs on a fresh thread
pub type WorkerFn = Box<dyn FnOnce() + Send + 'static>;

/// Starts worker threads. Spawning is fallible, so the launcher can stop on the first failure.
pub trait Spawner {
    fn spawn(&self, id: WorkerId, work: WorkerFn) -> io::Result<WorkerHandle>;
}

/// Handle to a started worker, consumed by joining it
#[derive(Debug)]
pub struct WorkerHandle {
    id: WorkerId,
    inner: JoinHandle<()>,
}

impl WorkerHandle {
    pub fn new(id: WorkerId, inner: JoinHandle<()>) -> Self {
        Self { id, inner }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Block until the worker terminates
    pub fn join(self) -> Result<(), LaunchError> {
        self.inner
            .join()
            .map_err(|_| LaunchError::WorkerPanicked { id: self.id })
    }
}

/// Spawns named OS threads
#[derive(Debug, Clone)]
pub struct OsThreads {
    name_prefix: String,
}

impl OsThreads {
    pub fn new(name_prefix: impl Into<String>) -> Self {
        Self {
            name_prefix: name_prefix.into(),
        }
    }

    pub fn thread_name(&self, id: WorkerId) -> String {
        format!("{}-{}", self.name_prefix, id)
    }
}

impl Default for OsThreads {
    fn default() -> Self {
        Self::new("worker")
    }
}

impl Spawner for OsThreads {
    fn spawn(&self, id: WorkerId, work: WorkerFn) -> io::Result<WorkerHandle> {
        let name = self.thread_name(id);
        // std panics on interior NUL in thread names
        if name.contains('\0') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("thread name {name:?} contains a NUL byte"),
            ));
        }
        let inner = thread::Builder::new().name(name).spawn(work)?;
        Ok(WorkerHandle::new(id, inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::bounded;

    #[test]
    fn test_threads_are_named_after_worker() {
        let spawner = OsThreads::new("probe");
        let (tx, rx) = bounded(1);

        let handle = spawner
            .spawn(
                WorkerId::new(2),
                Box::new(move || {
                    let name = thread::current().name().map(str::to_string);
                    tx.send(name).unwrap();
                }),
            )
            .unwrap();

        assert_eq!(handle.id(), WorkerId::new(2));
        handle.join().unwrap();
        assert_eq!(rx.recv().unwrap().as_deref(), Some("probe-2"));
    }

    #[test]
    fn test_nul_in_thread_name_is_invalid_input() {
        let spawner = OsThreads::new("bad\0prefix");

        let err = spawner
            .spawn(WorkerId::new(1), Box::new(|| {}))
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("NUL"));
    }

    #[test]
    fn test_join_reports_panicking_worker() {
        let spawner = OsThreads::default();
        let handle = spawner
            .spawn(WorkerId::new(5), Box::new(|| panic!("worker blew up")))
            .unwrap();

        match handle.join() {
            Err(LaunchError::WorkerPanicked { id }) => assert_eq!(id, WorkerId::new(5)),
            other => panic!("expected a panic error, got {other:?}"),
        }
    }
}
