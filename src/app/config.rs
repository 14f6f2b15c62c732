//! Configuration and credential loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, CONFIG_DIR, CONFIG_FILE, Credential, SECRETS_FILE};
use crate::ports::SecretStore;
use crate::services::{EnvSecretStore, LayeredSecretStore, TomlSecretStore};

/// Load `.ebookgen/config.toml` under `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<AppConfig, AppError> {
    let path = root.join(CONFIG_DIR).join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Secret store consulted at startup: environment first, then `.ebookgen/secrets.toml`.
pub fn default_secret_store(root: &Path) -> LayeredSecretStore {
    LayeredSecretStore::new()
        .with_layer(EnvSecretStore)
        .with_layer(TomlSecretStore::new(root.join(CONFIG_DIR).join(SECRETS_FILE)))
}

/// Resolve the credential stored under `key`, failing when no store has a usable value.
pub fn load_credential(store: &dyn SecretStore, key: &str) -> Result<Credential, AppError> {
    store
        .lookup(key)?
        .and_then(Credential::new)
        .ok_or_else(|| AppError::MissingCredential { key: key.to_string() })
}
