//! Presentation shell state machine.
//!
//! `Idle -> Validating -> Generating(Analyzing | Drafting) -> Success | Failed`.
//! Success and Failed accept the next trigger just like Idle. Generation runs on
//! a [`GenerationTask`]; the state only advances on events it reports.

mod worker;

use std::sync::Arc;
use std::time::Duration;

pub use worker::{GenerationTask, TaskEvent, TaskPoll};

use crate::app::AppContext;
use crate::app::commands::generate::{GenerationOutcome, GenerationPhase};
use crate::domain::{AppError, Audience};
use crate::ports::{ArtifactStore, GenerationClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Validating,
    Generating(GenerationPhase),
    Success(GenerationOutcome),
    /// Ready for a new trigger; holds the message that was shown.
    Failed(String),
}

impl ShellState {
    /// Presentational progress percentage, if any.
    pub fn progress(&self) -> Option<u8> {
        match self {
            ShellState::Generating(phase) => Some(phase.progress()),
            ShellState::Success(_) => Some(100),
            _ => None,
        }
    }
}

/// Response to a user trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Generation started for the audience.
    Started(Audience),
    /// Input was rejected; carries the warning to show.
    Rejected(String),
    /// A generation is already running.
    Ignored,
    /// Input was valid but the generation could not be started; carries the cause.
    Failed(String),
}

/// Transition reported to the renderer.
#[derive(Debug)]
pub enum ShellEvent {
    PhaseChanged(GenerationPhase),
    Succeeded(GenerationOutcome),
    Failed(AppError),
}

pub struct Shell<G, A>
where
    G: GenerationClient + Send + Sync + 'static,
    A: ArtifactStore + Send + Sync + 'static,
{
    ctx: Arc<AppContext<G, A>>,
    state: ShellState,
    task: Option<GenerationTask>,
}

impl<G, A> Shell<G, A>
where
    G: GenerationClient + Send + Sync + 'static,
    A: ArtifactStore + Send + Sync + 'static,
{
    pub fn new(ctx: Arc<AppContext<G, A>>) -> Self {
        Self { ctx, state: ShellState::Idle, task: None }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn context(&self) -> &AppContext<G, A> {
        &self.ctx
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.state, ShellState::Generating(_))
    }

    /// Handle the trigger control with the current contents of the input field.
    pub fn trigger(&mut self, input: &str) -> TriggerOutcome {
        if self.is_generating() {
            tracing::debug!("trigger ignored while generating");
            return TriggerOutcome::Ignored;
        }

        self.state = ShellState::Validating;
        let audience = match Audience::parse(input) {
            Ok(audience) => audience,
            Err(err) => {
                self.state = ShellState::Idle;
                return TriggerOutcome::Rejected(err.to_string());
            }
        };

        match GenerationTask::spawn(Arc::clone(&self.ctx), audience.clone()) {
            Ok(task) => {
                self.task = Some(task);
                self.state = ShellState::Generating(GenerationPhase::Analyzing);
                tracing::info!(audience = %audience, "generation started");
                TriggerOutcome::Started(audience)
            }
            Err(err) => self.fail_to_start(err),
        }
    }

    fn fail_to_start(&mut self, err: AppError) -> TriggerOutcome {
        tracing::error!(error = %err, "could not start generation");
        let cause = err.to_string();
        self.state = ShellState::Failed(AppError::generation_failed(cause.clone()).to_string());
        TriggerOutcome::Failed(cause)
    }

    /// Wait up to `timeout` for the running generation to report progress.
    ///
    /// Returns `None` when nothing changed or no generation is running.
    pub fn next_event(&mut self, timeout: Duration) -> Option<ShellEvent> {
        loop {
            let task = self.task.as_mut()?;
            match task.poll(timeout) {
                TaskPoll::Pending => return None,
                TaskPoll::Event(TaskEvent::Phase(phase)) => {
                    if self.state == ShellState::Generating(phase) {
                        continue;
                    }
                    self.state = ShellState::Generating(phase);
                    return Some(ShellEvent::PhaseChanged(phase));
                }
                TaskPoll::Event(TaskEvent::Finished(Ok(outcome))) => {
                    self.task = None;
                    tracing::info!(file = %outcome.artifact.file_name, "generation succeeded");
                    self.state = ShellState::Success(outcome.clone());
                    return Some(ShellEvent::Succeeded(outcome));
                }
                TaskPoll::Event(TaskEvent::Finished(Err(err))) => {
                    self.task = None;
                    tracing::warn!(error = %err, "generation failed");
                    self.state = ShellState::Failed(err.to_string());
                    return Some(ShellEvent::Failed(err));
                }
                TaskPoll::Lost => {
                    self.task = None;
                    let err = AppError::generation_failed("generation worker stopped without a result");
                    self.state = ShellState::Failed(err.to_string());
                    return Some(ShellEvent::Failed(err));
                }
            }
        }
    }
}
