//! Generation provider port definition.

use crate::domain::AppError;

/// Port for a text-generation provider.
///
/// Implementations submit one prompt to a fixed model and return the text of
/// its reply. Every failure, whatever its cause, is reported as
/// [`AppError::GenerationFailed`].
pub trait GenerationClient {
    /// Submit `prompt` and block until the provider answers.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
