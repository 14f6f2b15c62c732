use crate::domain::AppConfig;
use crate::ports::{ArtifactStore, GenerationClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GenerationClient, A: ArtifactStore> {
    client: G,
    artifacts: A,
    config: AppConfig,
}

impl<G: GenerationClient, A: ArtifactStore> AppContext<G, A> {
    /// Create a new application context.
    pub fn new(client: G, artifacts: A, config: AppConfig) -> Self {
        Self { client, artifacts, config }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// Get a reference to the artifact store.
    pub fn artifacts(&self) -> &A {
        &self.artifacts
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
