use std::io;

use thiserror::Error;

/// Library-wide error type for ebookgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The API credential could not be found in any secret store.
    #[error("Security Alert: API Key not found. Please set {key} in the environment or in .ebookgen/secrets.toml.")]
    MissingCredential { key: String },

    /// User input was rejected before any generation call.
    #[error("{0}")]
    Validation(String),

    /// Any failure while talking to the generation provider or handling its response.
    #[error("An error occurred: {0}")]
    GenerationFailed(String),

    /// The instruction template failed to render.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),

    /// The derived artifact file name cannot be written as a single file.
    #[error("Invalid artifact file name '{0}': must not contain path separators")]
    InvalidArtifactName(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Coarse error categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Fatal; requires operator intervention.
    Configuration,
    /// Recoverable; the user may retry immediately.
    Validation,
    /// Recoverable; the shell returns to its ready state.
    Generation,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn generation_failed<S: Into<String>>(message: S) -> Self {
        AppError::GenerationFailed(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Configuration(_)
            | AppError::MissingCredential { .. }
            | AppError::TomlParse(_) => ErrorCategory::Configuration,
            AppError::Validation(_) => ErrorCategory::Validation,
            AppError::Io(_)
            | AppError::GenerationFailed(_)
            | AppError::PromptRender(_)
            | AppError::InvalidArtifactName(_) => ErrorCategory::Generation,
        }
    }

    /// Whether the process must stop offering generation after this error.
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}
