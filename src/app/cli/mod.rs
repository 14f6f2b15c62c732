//! CLI Adapter.

mod render;
mod session;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, GenerationOutcome};
use crate::app::shell::{Shell, ShellEvent, TriggerOutcome};
use crate::domain::AppError;
use crate::ports::{ArtifactStore, GenerationClient};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "EBOOKGEN_LOG";

/// How long the CLI waits for a worker event before checking again.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "ebookgen")]
#[command(version)]
#[command(
    about = "Generate publication-ready HR career e-books for any professional community",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive generator (default)
    #[clap(visible_alias = "s")]
    Session,
    /// Generate one e-book and save it as HTML
    #[clap(visible_alias = "g")]
    Generate {
        /// Target community or job role, e.g. "Data Scientists"
        audience: String,
        /// Directory the HTML file is written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Do not print the inline preview
        #[arg(long)]
        no_preview: bool,
    },
    /// Print the instruction sent to the model without calling it
    #[clap(visible_alias = "p")]
    Prompt {
        /// Target community or job role
        audience: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => session::run_session(),
        Commands::Generate { audience, output_dir, no_preview } => {
            run_generate(&audience, output_dir, no_preview)
        }
        Commands::Prompt { audience } => run_prompt(&audience),
    };

    if let Err(e) = result {
        match e {
            AppError::Validation(_) => eprintln!("⚠️  {}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_prompt(audience: &str) -> Result<(), AppError> {
    let prompt = api::prompt_preview(audience)?;
    println!("{}", prompt);
    Ok(())
}

fn run_generate(audience: &str, output_dir: Option<PathBuf>, no_preview: bool) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let ctx = api::create_context(&root, output_dir)?;
    let preview_lines = if no_preview { None } else { Some(ctx.config().output.preview_lines) };
    let mut shell = Shell::new(Arc::new(ctx));

    match shell.trigger(audience) {
        TriggerOutcome::Started(audience) => {
            println!("{}", render::phase_status(api::GenerationPhase::Analyzing, &audience));
            drive(&mut shell, &audience, preview_lines).map(|_| ())
        }
        TriggerOutcome::Rejected(warning) => Err(AppError::Validation(warning)),
        TriggerOutcome::Failed(cause) => Err(AppError::generation_failed(cause)),
        TriggerOutcome::Ignored => Ok(()),
    }
}

/// Render shell events until the running generation settles.
fn drive<G, A>(
    shell: &mut Shell<G, A>,
    audience: &crate::domain::Audience,
    preview_lines: Option<usize>,
) -> Result<GenerationOutcome, AppError>
where
    G: GenerationClient + Send + Sync + 'static,
    A: ArtifactStore + Send + Sync + 'static,
{
    while shell.is_generating() {
        match shell.next_event(POLL_INTERVAL) {
            None => continue,
            Some(ShellEvent::PhaseChanged(phase)) => {
                println!("{}", render::phase_status(phase, audience));
            }
            Some(ShellEvent::Succeeded(outcome)) => {
                match preview_lines {
                    Some(lines) => println!("{}", render::delivery(&outcome, lines)),
                    None => println!(
                        "✅ E-Book Generated Successfully! Saved {} ({})",
                        outcome.saved_to.display(),
                        outcome.artifact.content_type
                    ),
                }
                return Ok(outcome);
            }
            Some(ShellEvent::Failed(err)) => return Err(err),
        }
    }
    Err(AppError::generation_failed("generation ended without a result"))
}
