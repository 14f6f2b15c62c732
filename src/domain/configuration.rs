//! Application configuration loaded from `.ebookgen/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Directory holding configuration and secrets, relative to the working directory.
pub const CONFIG_DIR: &str = ".ebookgen";
/// Optional configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";
/// Secret store file inside [`CONFIG_DIR`].
pub const SECRETS_FILE: &str = "secrets.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Generation provider configuration.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Artifact delivery configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Generation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Fixed model name the prompt is submitted to.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generative language API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { model: default_model(), api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("generation.model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("generation.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Endpoint for a single `generateContent` call against the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.as_str().trim_end_matches('/'),
            self.model
        )
    }
}

/// Artifact delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory downloaded e-books are written to.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Height of the inline preview, in lines.
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir(), preview_lines: default_preview_lines() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.preview_lines == 0 {
            return Err(AppError::config_error("output.preview_lines must be greater than 0"));
        }
        Ok(())
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    120
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_preview_lines() -> usize {
    40
}
