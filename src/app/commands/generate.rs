//! One generation cycle: prompt, generate, sanitize, package, deliver.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Audience, EbookArtifact, sanitize_response};
use crate::ports::{ArtifactStore, GenerationClient};
use crate::services::build_prompt;

/// Presentational sub-phase of a running generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Analyzing,
    Drafting,
}

impl GenerationPhase {
    /// Progress shown for this phase. Not tied to real completion.
    pub fn progress(&self) -> u8 {
        match self {
            GenerationPhase::Analyzing => 20,
            GenerationPhase::Drafting => 50,
        }
    }
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub audience: Audience,
    pub artifact: EbookArtifact,
    pub saved_to: PathBuf,
}

/// Run the pipeline for an already validated audience.
///
/// `on_phase` is told when each presentational phase begins.
pub fn execute<G, A>(
    ctx: &AppContext<G, A>,
    audience: &Audience,
    mut on_phase: impl FnMut(GenerationPhase),
) -> Result<GenerationOutcome, AppError>
where
    G: GenerationClient,
    A: ArtifactStore,
{
    on_phase(GenerationPhase::Analyzing);
    let prompt = build_prompt(audience)?;

    on_phase(GenerationPhase::Drafting);
    let raw = ctx.client().generate(&prompt)?;

    let artifact = EbookArtifact::new(audience, sanitize_response(&raw));
    let saved_to = ctx.artifacts().save(&artifact)?;

    Ok(GenerationOutcome { audience: audience.clone(), artifact, saved_to })
}
