mod artifact_store;
mod generation_client;
mod secret_store;

pub use artifact_store::ArtifactStore;
pub use generation_client::GenerationClient;
pub use secret_store::SecretStore;
