//! Interactive generator loop.

use std::io::{BufRead, ErrorKind, IsTerminal};
use std::sync::Arc;

use chrono::Datelike;
use dialoguer::{Error as DialoguerError, Input};

use super::{drive, render};
use crate::app::api::{self, GenerationPhase};
use crate::app::shell::{Shell, TriggerOutcome};
use crate::domain::AppError;
use crate::ports::{ArtifactStore, GenerationClient};

const AUDIENCE_PROMPT: &str = "Target Community / Job Role (e.g., Data Scientists, Nursing Staff)";

/// Supplies the contents of the audience field, one entry per trigger.
pub(super) trait AudienceSource {
    /// `None` when the user interrupts or input ends.
    fn next_audience(&mut self) -> Result<Option<String>, AppError>;
}

/// Line editor on an interactive terminal.
struct TerminalAudienceSource;

impl AudienceSource for TerminalAudienceSource {
    fn next_audience(&mut self) -> Result<Option<String>, AppError> {
        match Input::<String>::new().with_prompt(AUDIENCE_PROMPT).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err))
                if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                Ok(None)
            }
            Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
        }
    }
}

/// One audience per line, for piped or redirected input.
pub(super) struct LineAudienceSource<R> {
    reader: R,
}

impl<R: BufRead> LineAudienceSource<R> {
    pub(super) fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AudienceSource for LineAudienceSource<R> {
    fn next_audience(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let entry = line.trim_end_matches(['\n', '\r']).to_string();
        println!("{}: {}", AUDIENCE_PROMPT, entry);
        Ok(Some(entry))
    }
}

/// Tally of what happened across one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct SessionSummary {
    pub generated: usize,
    pub warnings: usize,
    pub failures: usize,
}

pub(super) fn run_session() -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let ctx = api::create_context(&root, None)?;

    println!("{}\n", render::header());
    println!("{}\n", render::status_panel(&ctx.config().generation.model));

    let preview_lines = ctx.config().output.preview_lines;
    let mut shell = Shell::new(Arc::new(ctx));

    let stdin = std::io::stdin();
    let summary = if stdin.is_terminal() {
        run_loop(&mut shell, &mut TerminalAudienceSource, preview_lines)?
    } else {
        run_loop(&mut shell, &mut LineAudienceSource::new(stdin.lock()), preview_lines)?
    };
    tracing::debug!(
        generated = summary.generated,
        warnings = summary.warnings,
        failures = summary.failures,
        "session ended"
    );

    println!("{}", render::footer(chrono::Local::now().year()));
    Ok(())
}

/// Trigger the shell once per entry until the source runs dry.
pub(super) fn run_loop<G, A, S>(
    shell: &mut Shell<G, A>,
    source: &mut S,
    preview_lines: usize,
) -> Result<SessionSummary, AppError>
where
    G: GenerationClient + Send + Sync + 'static,
    A: ArtifactStore + Send + Sync + 'static,
    S: AudienceSource + ?Sized,
{
    let mut summary = SessionSummary::default();

    while let Some(input) = source.next_audience()? {
        match shell.trigger(&input) {
            TriggerOutcome::Started(audience) => {
                println!("{}", render::phase_status(GenerationPhase::Analyzing, &audience));
                match drive(shell, &audience, Some(preview_lines)) {
                    Ok(_) => summary.generated += 1,
                    Err(err) => {
                        eprintln!("❌ {}", err);
                        summary.failures += 1;
                    }
                }
            }
            TriggerOutcome::Rejected(warning) => {
                println!("⚠️  {}", warning);
                summary.warnings += 1;
            }
            TriggerOutcome::Failed(cause) => {
                eprintln!("❌ {}", AppError::generation_failed(cause));
                summary.failures += 1;
            }
            TriggerOutcome::Ignored => {}
        }
        println!();
    }

    Ok(summary)
}
