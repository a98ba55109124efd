//! Progress reporting shared by the launcher and its workers
//!
//! Every progress line is an [`Event`]. A [`Reporter`] receives whole events, so
//! one event always becomes one uninterrupted line no matter how many workers
//! report at once.

use crate::launcher::worker::WorkerId;
use crossbeam::channel::{Receiver, Sender, unbounded};
use std::fmt;
use std::io::{self, Write};

/// One line of launch progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Emitted once, before the first spawn
    Creating,
    /// Emitted by a worker at the start of every iteration
    Running(WorkerId),
    /// Emitted by a worker after its last iteration
    Finished(WorkerId),
    /// Emitted once all spawns succeeded
    Waiting,
    /// Emitted after every worker was joined
    AllFinished,
}

impl Event {
    pub fn worker(&self) -> Option<WorkerId> {
        match self {
            Event::Running(id) | Event::Finished(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Creating => f.write_str("Creating threads"),
            Event::Running(id) => write!(f, "Thread: {id} running"),
            Event::Finished(id) => write!(f, "Thread: {id} finished"),
            Event::Waiting => f.write_str("main(): threads created, waiting for finish..."),
            Event::AllFinished => f.write_str("All threads finished"),
        }
    }
}

/// Sink for progress events, callable from any thread
pub trait Reporter: Send + Sync {
    fn report(&self, event: Event);
}

/// Writes each event as a line on standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, event: Event) {
        // Holding the lock for the whole line keeps concurrent workers from splicing output
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{event}").ok();
        stdout.flush().ok();
    }
}

/// Collects events in arrival order instead of printing them
pub struct CaptureReporter {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl CaptureReporter {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Drain everything reported so far
    pub fn events(&self) -> Vec<Event> {
        self.rx.try_iter().collect()
    }

    /// Drain everything reported so far, rendered as output lines
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(Event::to_string).collect()
    }
}

impl Default for CaptureReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for CaptureReporter {
    fn report(&self, event: Event) {
        // Receiver lives as long as self
        self.tx.send(event).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_event_lines_match_program_output() {
        let id = WorkerId::new(3);
        assert_eq!(Event::Creating.to_string(), "Creating threads");
        assert_eq!(Event::Running(id).to_string(), "Thread: 3 running");
        assert_eq!(Event::Finished(id).to_string(), "Thread: 3 finished");
        assert_eq!(
            Event::Waiting.to_string(),
            "main(): threads created, waiting for finish..."
        );
        assert_eq!(Event::AllFinished.to_string(), "All threads finished");
    }

    #[test]
    fn test_event_worker() {
        assert_eq!(Event::Running(WorkerId::new(1)).worker(), Some(WorkerId::new(1)));
        assert_eq!(Event::Finished(WorkerId::new(2)).worker(), Some(WorkerId::new(2)));
        assert_eq!(Event::Waiting.worker(), None);
    }

    #[test]
    fn test_capture_drains() {
        let capture = CaptureReporter::new();
        capture.report(Event::Creating);
        capture.report(Event::Waiting);

        assert_eq!(capture.lines(), vec![
            "Creating threads".to_string(),
            "main(): threads created, waiting for finish...".to_string(),
        ]);
        assert!(capture.events().is_empty());
    }

    #[test]
    fn test_capture_from_many_threads() {
        let capture = Arc::new(CaptureReporter::new());
        let handles: Vec<_> = (1..=8)
            .map(|n| {
                let capture = capture.clone();
                thread::spawn(move || capture.report(Event::Finished(WorkerId::new(n))))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<usize> = capture
            .events()
            .iter()
            .filter_map(Event::worker)
            .map(WorkerId::get)
            .collect();
        ids.sort();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
