use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::{AppError, EbookArtifact};
use crate::ports::ArtifactStore;

/// Writes artifacts into a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    dir: PathBuf,
}

impl FilesystemArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn save(&self, artifact: &EbookArtifact) -> Result<PathBuf, AppError> {
        ensure_plain_file_name(&artifact.file_name)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, artifact.content.as_bytes())?;

        tracing::info!(path = %path.display(), bytes = artifact.len(), "e-book written");
        Ok(path)
    }
}

fn ensure_plain_file_name(file_name: &str) -> Result<(), AppError> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !file_name.contains('\\') => Ok(()),
        _ => Err(AppError::InvalidArtifactName(file_name.to_string())),
    }
}
