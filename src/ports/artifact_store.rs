use std::path::PathBuf;

use crate::domain::{AppError, EbookArtifact};

/// Port for delivering generated e-books.
pub trait ArtifactStore {
    /// Persist the artifact under its file name and return where it landed.
    fn save(&self, artifact: &EbookArtifact) -> Result<PathBuf, AppError>;
}
