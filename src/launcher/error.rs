use crate::launcher::worker::WorkerId;
use thiserror::Error;

/// Errors that abort a launch
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The OS refused to start a worker thread
    #[error("error creating thread {id}: {source}")]
    Spawn {
        id: WorkerId,
        #[source]
        source: std::io::Error,
    },
    /// A worker unwound instead of reaching its finished state
    #[error("thread {id} panicked before finishing")]
    WorkerPanicked { id: WorkerId },
}

impl LaunchError {
    /// Identifier of the worker the error is about
    pub fn worker(&self) -> WorkerId {
        match self {
            LaunchError::Spawn { id, .. } | LaunchError::WorkerPanicked { id } => *id,
        }
    }
}
