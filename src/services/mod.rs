mod artifact_store_filesystem;
mod gemini_client_http;
pub mod prompt_builder;
mod secret_store_env;
mod secret_store_layered;
mod secret_store_toml;

pub use artifact_store_filesystem::FilesystemArtifactStore;
pub use gemini_client_http::HttpGeminiClient;
pub use prompt_builder::build_prompt;
pub use secret_store_env::EnvSecretStore;
pub use secret_store_layered::LayeredSecretStore;
pub use secret_store_toml::TomlSecretStore;
