//! Secret store backed by a `secrets.toml` file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SecretStore;

/// Top-level string keys of a TOML file. A missing file holds no secrets.
#[derive(Debug, Clone)]
pub struct TomlSecretStore {
    path: PathBuf,
}

impl TomlSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SecretStore for TomlSecretStore {
    fn name(&self) -> &str {
        "secrets file"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let table: toml::Table = toml::from_str(&content)?;

        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(AppError::config_error(format!(
                "{} in {} must be a string",
                key,
                self.path.display()
            ))),
        }
    }
}
