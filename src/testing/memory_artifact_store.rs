use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, EbookArtifact};
use crate::ports::ArtifactStore;

/// Keeps saved artifacts in memory.
#[derive(Clone, Default)]
pub struct MemoryArtifactStore {
    saved: Arc<Mutex<Vec<EbookArtifact>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<EbookArtifact> {
        self.saved.lock().unwrap().clone()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn save(&self, artifact: &EbookArtifact) -> Result<PathBuf, AppError> {
        self.saved.lock().unwrap().push(artifact.clone());
        Ok(PathBuf::from("memory").join(&artifact.file_name))
    }
}
