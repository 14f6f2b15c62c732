//! Background execution of a generation cycle.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerationOutcome, GenerationPhase};
use crate::domain::{AppError, Audience};
use crate::ports::{ArtifactStore, GenerationClient};

/// Message sent from the worker to the shell.
#[derive(Debug)]
pub enum TaskEvent {
    Phase(GenerationPhase),
    Finished(Result<GenerationOutcome, AppError>),
}

/// Result of waiting on a task.
#[derive(Debug)]
pub enum TaskPoll {
    Event(TaskEvent),
    Pending,
    /// The worker went away without reporting a result.
    Lost,
}

/// Handle to a generation running on its own thread.
pub struct GenerationTask {
    events: Receiver<TaskEvent>,
    handle: Option<JoinHandle<()>>,
}

impl GenerationTask {
    pub fn spawn<G, A>(ctx: Arc<AppContext<G, A>>, audience: Audience) -> Result<Self, AppError>
    where
        G: GenerationClient + Send + Sync + 'static,
        A: ArtifactStore + Send + Sync + 'static,
    {
        let (sender, events) = mpsc::channel();

        let handle = thread::Builder::new().name("ebook-generation".to_string()).spawn(move || {
            let phase_sender = sender.clone();
            let result = generate::execute(&*ctx, &audience, |phase| {
                let _ = phase_sender.send(TaskEvent::Phase(phase));
            });
            // The shell may have been dropped; nothing is left to notify then.
            let _ = sender.send(TaskEvent::Finished(result));
        })?;

        Ok(Self { events, handle: Some(handle) })
    }

    /// Wait up to `timeout` for the next event.
    pub fn poll(&mut self, timeout: Duration) -> TaskPoll {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                if matches!(event, TaskEvent::Finished(_)) {
                    self.join();
                }
                TaskPoll::Event(event)
            }
            Err(RecvTimeoutError::Timeout) => TaskPoll::Pending,
            Err(RecvTimeoutError::Disconnected) => {
                self.join();
                TaskPoll::Lost
            }
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::error!("generation worker panicked");
        }
    }
}
