mod fake_generation_client;
mod memory_artifact_store;
mod static_secret_store;

pub use fake_generation_client::FakeGenerationClient;
pub use memory_artifact_store::MemoryArtifactStore;
pub use static_secret_store::StaticSecretStore;
