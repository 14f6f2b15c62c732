use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::SecretStore;

/// Fixed in-memory secrets.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    values: HashMap<String, String>,
}

impl StaticSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl SecretStore for StaticSecretStore {
    fn name(&self) -> &str {
        "static"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }
}
