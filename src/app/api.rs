//! API Facade for the application.
//!
//! Glues configuration, secret loading and adapter construction together.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::{default_secret_store, load_config, load_credential};
use crate::domain::{AppError, Audience, GEMINI_API_KEY};
use crate::services::{FilesystemArtifactStore, HttpGeminiClient, build_prompt};

pub use crate::app::commands::generate::{GenerationOutcome, GenerationPhase};

/// Context wired to the real provider and the local filesystem.
pub type LiveContext = AppContext<HttpGeminiClient, FilesystemArtifactStore>;

/// Build the live context for `root`.
///
/// Fails with [`AppError::MissingCredential`] when no API key is configured, in
/// which case nothing may be generated.
pub fn create_context(root: &Path, output_dir: Option<PathBuf>) -> Result<LiveContext, AppError> {
    let config = load_config(root)?;
    let credential = load_credential(&default_secret_store(root), GEMINI_API_KEY)?;
    let client = HttpGeminiClient::new(credential, &config.generation)?;

    let dir = output_dir.unwrap_or_else(|| config.output.dir.clone());
    let dir = if dir.is_absolute() { dir } else { root.join(dir) };

    Ok(AppContext::new(client, FilesystemArtifactStore::new(dir), config))
}

/// Render the instruction that would be sent for `audience`.
pub fn prompt_preview(audience: &str) -> Result<String, AppError> {
    build_prompt(&Audience::parse(audience)?)
}
